//! Notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted notification for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    pub kind: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
