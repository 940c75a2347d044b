use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Failed to load game: server responded with HTTP {status}")]
    BootstrapStatus { status: u16 },
    #[error("Failed to load game: {detail}")]
    BootstrapTransport { detail: String },
    #[error("Failed to load game: invalid response ({detail})")]
    BootstrapDecode { detail: String },
    #[error("Connection error: {detail}")]
    Connect { detail: String },
    #[error("Protocol error: {detail}")]
    Protocol { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Stable machine-readable code, mainly for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Config { .. } => "CONFIG_ERROR",
            ClientError::BootstrapStatus { .. } => "BOOTSTRAP_STATUS",
            ClientError::BootstrapTransport { .. } => "BOOTSTRAP_TRANSPORT",
            ClientError::BootstrapDecode { .. } => "BOOTSTRAP_DECODE",
            ClientError::Connect { .. } => "CONNECT",
            ClientError::Protocol { .. } => "PROTOCOL",
            ClientError::Io(_) => "IO",
        }
    }

    pub fn is_bootstrap(&self) -> bool {
        matches!(
            self,
            ClientError::BootstrapStatus { .. }
                | ClientError::BootstrapTransport { .. }
                | ClientError::BootstrapDecode { .. }
        )
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn bootstrap_status(status: u16) -> Self {
        Self::BootstrapStatus { status }
    }

    pub fn bootstrap_transport(detail: impl Into<String>) -> Self {
        Self::BootstrapTransport {
            detail: detail.into(),
        }
    }

    pub fn bootstrap_decode(detail: impl Into<String>) -> Self {
        Self::BootstrapDecode {
            detail: detail.into(),
        }
    }

    pub fn connect(detail: impl Into<String>) -> Self {
        Self::Connect {
            detail: detail.into(),
        }
    }

    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Protocol {
            detail: detail.into(),
        }
    }
}
