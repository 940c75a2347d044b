use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, Snapshot};

/// Body of the one-shot bootstrap fetch: who we are and where we sit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResponse {
    pub game_id: String,
    pub player_id: PlayerId,
    pub state: Snapshot,
}
