//! Role model.
//!
//! System roles (ADMIN/EDITOR/VIEWER) are board-agnostic templates seeded at
//! startup; custom roles are scoped to a single board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Names of the seeded system roles.
pub mod system_roles {
    pub const ADMIN: &str = "ADMIN";
    pub const EDITOR: &str = "EDITOR";
    pub const VIEWER: &str = "VIEWER";
}

/// A permission level assignable to board members.
///
/// `board_id == None` marks a system-wide role; system roles are immutable
/// through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    pub is_system: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Whether the role grants member management on the given board.
    ///
    /// Only the system ADMIN role carries management rights; custom roles
    /// have no permission flags in the data model.
    pub fn grants_management(&self) -> bool {
        self.is_system && self.name == system_roles::ADMIN
    }
}

/// Request body for creating a custom board-scoped role.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
