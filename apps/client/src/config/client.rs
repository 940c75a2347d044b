use std::env;
use std::str::FromStr;

use crate::error::ClientError;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_WS_PATH: &str = "/ws";
pub const DEFAULT_BOOTSTRAP_PATH: &str = "/test_game";

/// Output format for the process-wide tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(ClientError::config(format!(
                "log format must be 'json' or 'text', got '{other}'"
            ))),
        }
    }
}

/// Which socket protocol to speak to the table server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Socket.IO on the server's base URL. The table server's own protocol.
    SocketIo,
    /// Plain WebSocket on `ws_path` carrying `{"event", "data"}` frames.
    WebSocket,
}

impl FromStr for Transport {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "socketio" | "socket.io" => Ok(Transport::SocketIo),
            "websocket" | "ws" => Ok(Transport::WebSocket),
            other => Err(ClientError::config(format!(
                "transport must be 'socketio' or 'websocket', got '{other}'"
            ))),
        }
    }
}

/// Where the table server lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
    pub ws_path: String,
    pub bootstrap_path: String,
    pub log_format: LogFormat,
    pub transport: Transport,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            ws_path: DEFAULT_WS_PATH.to_string(),
            bootstrap_path: DEFAULT_BOOTSTRAP_PATH.to_string(),
            log_format: LogFormat::Json,
            transport: Transport::SocketIo,
        }
    }
}

impl ClientConfig {
    /// Read configuration from the process environment:
    /// - `CLIENT_SERVER_URL` (default `http://127.0.0.1:5000`)
    /// - `CLIENT_WS_PATH` (default `/ws`)
    /// - `CLIENT_BOOTSTRAP_PATH` (default `/test_game`)
    /// - `CLIENT_LOG_FORMAT` (`json` or `text`, default `json`)
    /// - `CLIENT_TRANSPORT` (`socketio` or `websocket`, default `socketio`)
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_format = match non_empty("CLIENT_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };
        let transport = match non_empty("CLIENT_TRANSPORT") {
            Some(raw) => raw.parse()?,
            None => defaults.transport,
        };

        let config = Self {
            server_url: non_empty("CLIENT_SERVER_URL").unwrap_or(defaults.server_url),
            ws_path: non_empty("CLIENT_WS_PATH").unwrap_or(defaults.ws_path),
            bootstrap_path: non_empty("CLIENT_BOOTSTRAP_PATH").unwrap_or(defaults.bootstrap_path),
            log_format,
            transport,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ClientError::config(format!(
                "server URL must start with http:// or https://, got '{}'",
                self.server_url
            )));
        }
        for (name, path) in [
            ("websocket path", &self.ws_path),
            ("bootstrap path", &self.bootstrap_path),
        ] {
            if !path.starts_with('/') {
                return Err(ClientError::config(format!(
                    "{name} must start with '/', got '{path}'"
                )));
            }
        }
        Ok(())
    }

    fn base(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    pub fn bootstrap_url(&self) -> String {
        format!("{}{}", self.base(), self.bootstrap_path)
    }

    /// WebSocket endpoint on the same host: `http` → `ws`, `https` → `wss`.
    pub fn ws_url(&self) -> String {
        let base = self.base();
        let swapped = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{swapped}{}", self.ws_path)
    }

    /// URL handed to the connector for the configured transport.
    pub fn socket_url(&self) -> String {
        match self.transport {
            Transport::SocketIo => self.base().to_string(),
            Transport::WebSocket => self.ws_url(),
        }
    }
}
