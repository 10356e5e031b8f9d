//! Notification collaborator.
//!
//! Membership and invite operations emit events here after they commit.
//! Notifications are persisted per recipient and traced; delivery channels
//! (email, websocket, chat) live elsewhere and read from the same table.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Board, Notification};

/// Notification kinds.
pub mod kinds {
    pub const MEMBER_ADDED: &str = "member_added";
    pub const MEMBER_ROLE_CHANGED: &str = "member_role_changed";
    pub const MEMBER_REMOVED: &str = "member_removed";
    pub const INVITE_ACCEPTED: &str = "invite_accepted";
}

/// Persists and traces notification events.
#[derive(Clone)]
pub struct Notifier {
    pool: SqlitePool,
}

impl Notifier {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// A user was added to a board.
    pub async fn member_added(&self, board: &Board, user_id: &str) -> Result<(), AppError> {
        self.push(
            user_id,
            Some(&board.id),
            kinds::MEMBER_ADDED,
            format!("You were added to the board \"{}\"", board.name),
        )
        .await
    }

    /// A member's role changed.
    pub async fn member_role_changed(
        &self,
        board: &Board,
        user_id: &str,
        role_name: &str,
    ) -> Result<(), AppError> {
        self.push(
            user_id,
            Some(&board.id),
            kinds::MEMBER_ROLE_CHANGED,
            format!("Your role on the board \"{}\" is now {}", board.name, role_name),
        )
        .await
    }

    /// A member was removed from a board.
    pub async fn member_removed(&self, board: &Board, user_id: &str) -> Result<(), AppError> {
        self.push(
            user_id,
            Some(&board.id),
            kinds::MEMBER_REMOVED,
            format!("You were removed from the board \"{}\"", board.name),
        )
        .await
    }

    /// Someone joined a board through an invite link; tell the link's creator.
    pub async fn invite_accepted(
        &self,
        creator_id: &str,
        board: &Board,
        new_member_name: &str,
    ) -> Result<(), AppError> {
        self.push(
            creator_id,
            Some(&board.id),
            kinds::INVITE_ACCEPTED,
            format!(
                "{} joined the board \"{}\" via your invite link",
                new_member_name, board.name
            ),
        )
        .await
    }

    /// List a user's notifications, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, board_id, kind, message, created_at
               FROM notifications WHERE user_id = ?
               ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Notification {
                id: row.get("id"),
                user_id: row.get("user_id"),
                board_id: row.get("board_id"),
                kind: row.get("kind"),
                message: row.get("message"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    async fn push(
        &self,
        user_id: &str,
        board_id: Option<&str>,
        kind: &str,
        message: String,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO notifications (id, user_id, board_id, kind, message, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(user_id)
        .bind(board_id)
        .bind(kind)
        .bind(&message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        tracing::info!(user_id, kind, "notification recorded");

        Ok(())
    }
}
