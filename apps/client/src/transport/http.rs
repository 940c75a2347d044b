use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::protocol::bootstrap::BootstrapResponse;

/// HTTP client for the bootstrap request. Keeps the cookies the server sets
/// so the socket handshake can present the same session.
#[derive(Debug, Clone)]
pub struct BootstrapClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
}

impl BootstrapClient {
    pub fn new() -> Result<Self, ClientError> {
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| ClientError::bootstrap_transport(e.to_string()))?;
        Ok(Self { http, jar })
    }

    pub async fn fetch(&self, url: &str) -> Result<BootstrapResponse, ClientError> {
        fetch_bootstrap(&self.http, url).await
    }

    /// `Cookie` header value the jar would send to `url`, if any.
    pub fn session_cookie(&self, url: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        let header = self.jar.cookies(&url)?;
        let cookie = header.to_str().ok()?.to_string();
        debug!(url = %url, "[BOOTSTRAP] session cookie captured");
        Some(cookie)
    }
}

/// Fetch the game to sit down at. Any non-2xx status is an error carrying
/// the status code; nothing is retried.
pub async fn fetch_bootstrap(
    http: &reqwest::Client,
    url: &str,
) -> Result<BootstrapResponse, ClientError> {
    info!(url, "[BOOTSTRAP] fetching game");

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ClientError::bootstrap_transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, status = status.as_u16(), "[BOOTSTRAP] server rejected request");
        return Err(ClientError::bootstrap_status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::bootstrap_transport(e.to_string()))?;

    let bootstrap: BootstrapResponse =
        serde_json::from_str(&body).map_err(|e| ClientError::bootstrap_decode(e.to_string()))?;

    info!(
        game_id = %bootstrap.game_id,
        player_id = %bootstrap.player_id,
        "[BOOTSTRAP] game loaded"
    );
    Ok(bootstrap)
}
