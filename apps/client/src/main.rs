use std::io::BufRead;
use std::process::ExitCode;

use clap::Parser;
use client::config::{ClientConfig, Transport};
use client::telemetry::init_tracing;
use client::{start, ClientError, Connector, SocketIoConnector, TerminalPainter, WsConnector};
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "lorcana-client")]
#[command(about = "Terminal table client for a Lorcana game server")]
struct Args {
    /// Server base URL (overrides CLIENT_SERVER_URL)
    #[arg(long)]
    server: Option<String>,

    /// Socket protocol: socketio or websocket (overrides CLIENT_TRANSPORT)
    #[arg(long)]
    transport: Option<String>,

    /// WebSocket path on the server (overrides CLIENT_WS_PATH)
    #[arg(long)]
    ws_path: Option<String>,

    /// Bootstrap endpoint path (overrides CLIENT_BOOTSTRAP_PATH)
    #[arg(long)]
    bootstrap_path: Option<String>,

    /// Log format: json or text (overrides CLIENT_LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

fn load_config(args: Args) -> Result<ClientConfig, ClientError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(server) = args.server {
        config.server_url = server;
    }
    if let Some(transport) = args.transport {
        config.transport = transport.parse()?;
    }
    if let Some(path) = args.ws_path {
        config.ws_path = path;
    }
    if let Some(path) = args.bootstrap_path {
        config.bootstrap_path = path;
    }
    if let Some(format) = args.log_format {
        config.log_format = format.parse()?;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config(Args::parse()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format);
    info!(server = %config.server_url, transport = ?config.transport, "[MAIN] starting client");

    // A plain thread: a blocking stdin read cannot be cancelled and would
    // otherwise hold the runtime open at shutdown.
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut painter = TerminalPainter::new(std::io::stdout());
    let connector: Box<dyn Connector> = match config.transport {
        Transport::SocketIo => Box::new(SocketIoConnector),
        Transport::WebSocket => Box::new(WsConnector),
    };
    match start(&config, connector.as_ref(), &mut painter, rx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.code(), error = %err, "[MAIN] client stopped");
            ExitCode::FAILURE
        }
    }
}
