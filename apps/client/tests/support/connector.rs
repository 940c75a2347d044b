// Connector that records each handshake and dials the stub socket instead,
// forwarding the session cookie.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use client::{ClientError, Connection, Connector, Handshake, WsConnector};

pub struct RedirectConnector {
    target: String,
    calls: AtomicUsize,
    requested: Mutex<Vec<Handshake>>,
}

impl RedirectConnector {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<Handshake> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for RedirectConnector {
    async fn connect(&self, handshake: &Handshake) -> Result<Connection, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(handshake.clone());
        let redirected = Handshake {
            url: self.target.clone(),
            cookie: handshake.cookie.clone(),
        };
        WsConnector.connect(&redirected).await
    }
}
