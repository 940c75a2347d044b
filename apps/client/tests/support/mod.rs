#![allow(dead_code)]

pub mod connector;
pub mod stub_http;

use std::net::SocketAddr;

use client::{ClientConfig, Transport};

/// Config pointing the bootstrap fetch at a stub HTTP server. The stub
/// socket speaks plain WebSocket.
pub fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        server_url: format!("http://{addr}"),
        transport: Transport::WebSocket,
        ..ClientConfig::default()
    }
}
