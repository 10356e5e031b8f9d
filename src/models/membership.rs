//! Membership model: the (user, board, role) relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's membership on a board. At most one per (user, board) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    pub board_id: String,
    pub user_id: String,
    pub role_id: String,
    pub joined_at: DateTime<Utc>,
}

/// Membership joined with user and role info for board member listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    pub user_id: String,
    pub username: String,
    pub role_id: String,
    pub role_name: String,
    pub joined_at: DateTime<Utc>,
}

/// Request body for adding a member to a board directly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub user_id: String,
    pub role_id: String,
}

/// Request body for changing a member's role.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRoleRequest {
    pub role_id: String,
}
