use dugout_domain::ID;
use serde::{Deserialize, Serialize};

/// Outcome of a single drained notification row. Jobs that went through
/// (including the nothing-to-send case) serialize as `{id, sent}` and
/// failed ones as `{id, error}`.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum NotificationResultDTO {
    Sent { id: ID, sent: bool },
    Failed { id: ID, error: String },
}

impl NotificationResultDTO {
    pub fn sent(id: ID) -> Self {
        Self::Sent { id, sent: true }
    }

    pub fn failed(id: ID, error: String) -> Self {
        Self::Failed { id, error }
    }
}
