//! Startup sequence: bootstrap, first paint, connect, then the session loop.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::domain::project;
use crate::error::ClientError;
use crate::render::Painter;
use crate::session::overlay::Frame;
use crate::session::{run, SessionContext};
use crate::transport::{BootstrapClient, Connector, Handshake};

/// Run the client to completion.
///
/// A failed bootstrap is painted in place of the loading indicator and
/// returned; the socket is never opened in that case.
pub async fn start<C, P>(
    config: &ClientConfig,
    connector: &C,
    painter: &mut P,
    lines: UnboundedReceiver<String>,
) -> Result<(), ClientError>
where
    C: Connector + ?Sized,
    P: Painter + ?Sized,
{
    painter.loading()?;

    let http = BootstrapClient::new()?;
    let bootstrap_url = config.bootstrap_url();
    let bootstrap = match http.fetch(&bootstrap_url).await {
        Ok(bootstrap) => bootstrap,
        Err(err) => {
            error!(code = err.code(), error = %err, "[APP] bootstrap failed");
            painter.loading_failed(&err)?;
            return Err(err);
        }
    };

    painter.paint(&Frame::board(project(&bootstrap.state, &bootstrap.player_id)))?;

    // The server keys the socket to the player through the bootstrap's
    // session cookie.
    let handshake = Handshake {
        url: config.socket_url(),
        cookie: http.session_cookie(&bootstrap_url),
    };
    info!(
        url = %handshake.url,
        transport = ?config.transport,
        with_cookie = handshake.cookie.is_some(),
        "[APP] connecting"
    );
    let connection = connector.connect(&handshake).await?;

    let ctx = SessionContext::from_bootstrap(bootstrap, connection.outbound);
    run(ctx, connection.inbound, lines, painter).await
}
