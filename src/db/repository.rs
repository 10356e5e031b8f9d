//! Database repository for all board, role, membership, and invite operations.
//!
//! Uses prepared statements and transactions for data integrity.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::{AppError, InviteRejection};
use crate::models::{
    system_roles, AddMemberRequest, Board, BoardMember, CreateBoardRequest, CreateInviteRequest,
    CreateRoleRequest, CreateUserRequest, InviteLink, InviteUse, Membership, OriginMetadata,
    RedeemedInvite, Role, User,
};

/// How many times token generation retries after a collision before giving up.
const TOKEN_GENERATION_ATTEMPTS: u32 = 8;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== USER OPERATIONS ====================

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query("SELECT id, username, email, created_at FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query("SELECT id, username, email, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Create a new user. Usernames are unique.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        let result = sqlx::query("INSERT INTO users (id, username, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&request.username)
            .bind(&request.email)
            .bind(now)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(User {
                id,
                username: request.username.clone(),
                email: request.email.clone(),
                created_at: now,
            }),
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(format!(
                "Username {} is already taken",
                request.username
            ))),
            Err(err) => Err(err.into()),
        }
    }

    // ==================== BOARD OPERATIONS ====================

    /// List all boards.
    pub async fn list_boards(&self) -> Result<Vec<Board>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, description, owner_id, created_at, updated_at FROM boards ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(board_from_row).collect())
    }

    /// Get a board by ID.
    pub async fn get_board(&self, id: &str) -> Result<Option<Board>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, description, owner_id, created_at, updated_at FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(board_from_row))
    }

    /// Create a new board and the owner's ADMIN membership as one unit.
    pub async fn create_board(
        &self,
        request: &CreateBoardRequest,
        owner_id: &str,
    ) -> Result<Board, AppError> {
        self.get_user(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", owner_id)))?;

        let admin_role = self.get_system_role_by_name(system_roles::ADMIN).await?;

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO boards (id, name, description, owner_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(owner_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO board_memberships (id, board_id, user_id, role_id, joined_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&id)
        .bind(owner_id)
        .bind(&admin_role.id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Board {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            owner_id: owner_id.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Delete a board. Scoped roles, memberships, invite links, and the
    /// use ledger go with it via foreign-key cascade.
    pub async fn delete_board(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Board {} not found", id)));
        }

        Ok(())
    }

    // ==================== ROLE OPERATIONS ====================

    /// Seed the system roles. Idempotent: the partial unique index on
    /// system role names makes re-runs no-ops, so this is safe on every
    /// process start and across concurrent instances.
    pub async fn init_system_roles(&self) -> Result<(), AppError> {
        let now = Utc::now();
        for (name, description) in [
            (system_roles::ADMIN, "Full control of the board, its members, and invite links"),
            (system_roles::EDITOR, "Can create and edit tasks"),
            (system_roles::VIEWER, "Read-only access"),
        ] {
            sqlx::query(
                "INSERT OR IGNORE INTO roles (id, name, description, board_id, is_system, created_at, updated_at) VALUES (?, ?, ?, NULL, 1, ?, ?)",
            )
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(name)
            .bind(description)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    /// Get a role by ID.
    pub async fn get_role(&self, id: &str) -> Result<Option<Role>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, description, board_id, is_system, created_at, updated_at FROM roles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(role_from_row))
    }

    /// Get a system role by name.
    pub async fn get_system_role_by_name(&self, name: &str) -> Result<Role, AppError> {
        let row = sqlx::query(
            "SELECT id, name, description, board_id, is_system, created_at, updated_at FROM roles WHERE board_id IS NULL AND name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(role_from_row)
            .ok_or_else(|| AppError::NotFound(format!("System role {} not found", name)))
    }

    /// List the roles usable on a board: all system roles plus the roles
    /// scoped to it, system roles first.
    pub async fn list_board_roles(&self, board_id: &str) -> Result<Vec<Role>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, name, description, board_id, is_system, created_at, updated_at
               FROM roles WHERE board_id IS NULL OR board_id = ?
               ORDER BY is_system DESC, name"#,
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(role_from_row).collect())
    }

    /// Create a custom role scoped to one board.
    pub async fn create_board_role(
        &self,
        board_id: &str,
        request: &CreateRoleRequest,
    ) -> Result<Role, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO roles (id, name, description, board_id, is_system, created_at, updated_at) VALUES (?, ?, ?, ?, 0, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(board_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(Role {
                id,
                name: request.name.clone(),
                description: request.description.clone(),
                board_id: Some(board_id.to_string()),
                is_system: false,
                created_at: now,
                updated_at: now,
            }),
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(format!(
                "Role {} already exists on this board",
                request.name
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Resolve a role and check it is usable on the given board: either a
    /// system role or one scoped to that board.
    pub async fn resolve_board_role(&self, board_id: &str, role_id: &str) -> Result<Role, AppError> {
        let role = self
            .get_role(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", role_id)))?;

        match &role.board_id {
            Some(scoped) if scoped != board_id => Err(AppError::Validation(format!(
                "Role {} does not belong to this board",
                role_id
            ))),
            _ => Ok(role),
        }
    }

    // ==================== MEMBERSHIP OPERATIONS ====================

    /// Check if a user is a member of a board. Pure query, no side effects.
    pub async fn is_member(&self, board_id: &str, user_id: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT 1 FROM board_memberships WHERE board_id = ? AND user_id = ?")
            .bind(board_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Get a user's membership on a board.
    pub async fn get_membership(
        &self,
        board_id: &str,
        user_id: &str,
    ) -> Result<Option<Membership>, AppError> {
        let row = sqlx::query(
            "SELECT id, board_id, user_id, role_id, joined_at FROM board_memberships WHERE board_id = ? AND user_id = ?",
        )
        .bind(board_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(membership_from_row))
    }

    /// List a board's members joined with user and role info.
    pub async fn list_board_members(&self, board_id: &str) -> Result<Vec<BoardMember>, AppError> {
        let rows = sqlx::query(
            r#"SELECT m.user_id, u.username, m.role_id, r.name AS role_name, m.joined_at
               FROM board_memberships m
               JOIN users u ON u.id = m.user_id
               JOIN roles r ON r.id = m.role_id
               WHERE m.board_id = ?
               ORDER BY m.joined_at, u.username"#,
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| BoardMember {
                user_id: row.get("user_id"),
                username: row.get("username"),
                role_id: row.get("role_id"),
                role_name: row.get("role_name"),
                joined_at: row.get("joined_at"),
            })
            .collect())
    }

    /// Add a member to a board directly.
    pub async fn add_member(
        &self,
        board: &Board,
        request: &AddMemberRequest,
    ) -> Result<Membership, AppError> {
        self.get_user(&request.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;
        self.resolve_board_role(&board.id, &request.role_id).await?;

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO board_memberships (id, board_id, user_id, role_id, joined_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&board.id)
        .bind(&request.user_id)
        .bind(&request.role_id)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(Membership {
                id,
                board_id: board.id.clone(),
                user_id: request.user_id.clone(),
                role_id: request.role_id.clone(),
                joined_at: now,
            }),
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(format!(
                "User {} is already a member of this board",
                request.user_id
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Change a member's role. The board owner's role is fixed.
    pub async fn update_member_role(
        &self,
        board: &Board,
        user_id: &str,
        role_id: &str,
    ) -> Result<Membership, AppError> {
        if user_id == board.owner_id {
            return Err(AppError::PermissionDenied(
                "The board owner's role cannot be changed".to_string(),
            ));
        }

        let membership = self
            .get_membership(&board.id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User {} is not a member of this board", user_id))
            })?;
        self.resolve_board_role(&board.id, role_id).await?;

        sqlx::query("UPDATE board_memberships SET role_id = ? WHERE id = ?")
            .bind(role_id)
            .bind(&membership.id)
            .execute(&self.pool)
            .await?;

        Ok(Membership {
            role_id: role_id.to_string(),
            ..membership
        })
    }

    /// Remove a member from a board. The board owner cannot be removed.
    pub async fn remove_member(&self, board: &Board, user_id: &str) -> Result<(), AppError> {
        if user_id == board.owner_id {
            return Err(AppError::PermissionDenied(
                "The board owner cannot be removed".to_string(),
            ));
        }

        let result = sqlx::query("DELETE FROM board_memberships WHERE board_id = ? AND user_id = ?")
            .bind(&board.id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of this board",
                user_id
            )));
        }

        Ok(())
    }

    /// Check the requester may manage the board: the owner, or a member
    /// holding the system ADMIN role.
    pub async fn require_board_manager(
        &self,
        board: &Board,
        user_id: &str,
    ) -> Result<(), AppError> {
        if user_id == board.owner_id {
            return Ok(());
        }

        if let Some(membership) = self.get_membership(&board.id, user_id).await? {
            if let Some(role) = self.get_role(&membership.role_id).await? {
                if role.grants_management() {
                    return Ok(());
                }
            }
        }

        Err(AppError::PermissionDenied(
            "Managing this board requires the owner or an admin member".to_string(),
        ))
    }

    // ==================== INVITE LINK OPERATIONS ====================

    /// Get an invite link by ID.
    pub async fn get_invite_link(&self, id: &str) -> Result<Option<InviteLink>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, board_id, token, created_by, role_id, max_uses, use_count,
                      expires_at, created_at, updated_at, is_active
               FROM board_invite_links WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(invite_link_from_row))
    }

    /// Get an invite link by its opaque token.
    pub async fn get_invite_by_token(&self, token: &str) -> Result<Option<InviteLink>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, board_id, token, created_by, role_id, max_uses, use_count,
                      expires_at, created_at, updated_at, is_active
               FROM board_invite_links WHERE token = ?"#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(invite_link_from_row))
    }

    /// List a board's active invite links. Deactivated links are history
    /// and are not surfaced.
    pub async fn list_board_invites(&self, board_id: &str) -> Result<Vec<InviteLink>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, board_id, token, created_by, role_id, max_uses, use_count,
                      expires_at, created_at, updated_at, is_active
               FROM board_invite_links WHERE board_id = ? AND is_active = 1
               ORDER BY created_at DESC"#,
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(invite_link_from_row).collect())
    }

    /// Create an invite link with a freshly minted token.
    ///
    /// Token uniqueness is enforced by the storage layer; on a collision the
    /// loop regenerates rather than surfacing the conflict to the caller.
    pub async fn create_invite_link(
        &self,
        board: &Board,
        creator_id: &str,
        role: &Role,
        request: &CreateInviteRequest,
    ) -> Result<InviteLink, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        for _ in 0..TOKEN_GENERATION_ATTEMPTS {
            let token = generate_invite_token();

            let result = sqlx::query(
                r#"INSERT INTO board_invite_links
                    (id, board_id, token, created_by, role_id, max_uses, use_count,
                     expires_at, created_at, updated_at, is_active)
                   VALUES (?, ?, ?, ?, ?, ?, 0, ?, ?, ?, 1)"#,
            )
            .bind(&id)
            .bind(&board.id)
            .bind(&token)
            .bind(creator_id)
            .bind(&role.id)
            .bind(request.max_uses)
            .bind(request.expires_at)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => {
                    return Ok(InviteLink {
                        id,
                        board_id: board.id.clone(),
                        token,
                        created_by: creator_id.to_string(),
                        role_id: role.id.clone(),
                        max_uses: request.max_uses,
                        use_count: 0,
                        expires_at: request.expires_at,
                        created_at: now,
                        updated_at: now,
                        is_active: true,
                    })
                }
                Err(err) if is_unique_violation(&err) => {
                    tracing::debug!(board_id = %board.id, "invite token collision, regenerating");
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(AppError::Internal(
            "Could not generate a unique invite token".to_string(),
        ))
    }

    /// Deactivate an invite link. Only the link's creator or the board
    /// owner may do this; there is no reactivation path.
    pub async fn deactivate_link(&self, link_id: &str, requester_id: &str) -> Result<(), AppError> {
        let link = self
            .get_invite_link(link_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Invite link {} not found", link_id)))?;

        let board = self
            .get_board(&link.board_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board {} not found", link.board_id)))?;

        if requester_id != link.created_by && requester_id != board.owner_id {
            return Err(AppError::PermissionDenied(
                "Only the link's creator or the board owner may deactivate it".to_string(),
            ));
        }

        sqlx::query("UPDATE board_invite_links SET is_active = 0, updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(link_id)
            .execute(&self.pool)
            .await?;

        tracing::info!(link_id, requester_id, "invite link deactivated");

        Ok(())
    }

    /// Redeem an invite token for the given user.
    ///
    /// The non-member branch commits the membership row, the ledger entry,
    /// and the use-count increment as one transaction. The increment runs
    /// first as a guarded UPDATE so the exhaustion/active check is
    /// re-evaluated inside the same atomic unit: two concurrent redemptions
    /// of a link with one use left cannot both pass.
    pub async fn redeem_invite(
        &self,
        token: &str,
        user_id: &str,
        origin: &OriginMetadata,
    ) -> Result<RedeemedInvite, AppError> {
        let link = self
            .get_invite_by_token(token)
            .await?
            .ok_or(AppError::InvalidInvite(InviteRejection::NotFound))?;

        let now = Utc::now();
        link.validate(now)?;

        self.get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
        let role = self
            .get_role(&link.role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", link.role_id)))?;

        let redeemed = RedeemedInvite {
            board_id: link.board_id.clone(),
            role_id: role.id.clone(),
            role_name: role.name.clone(),
            already_member: true,
            link_id: link.id.clone(),
            link_creator_id: link.created_by.clone(),
        };

        // Re-clicking a link you already redeemed is a no-op: no membership
        // duplicate, no ledger entry, no counter increment.
        if self.is_member(&link.board_id, user_id).await? {
            return Ok(redeemed);
        }

        let mut tx = self.pool.begin().await?;

        // Guarded compare-and-increment. Leading the transaction with the
        // write takes the writer lock up front and re-checks the predicate
        // against current state, not the pre-transaction read.
        let guard = sqlx::query(
            r#"UPDATE board_invite_links
               SET use_count = use_count + 1, updated_at = ?
               WHERE id = ? AND is_active = 1
                 AND (max_uses IS NULL OR use_count < max_uses)"#,
        )
        .bind(now)
        .bind(&link.id)
        .execute(&mut *tx)
        .await?;

        if guard.rows_affected() == 0 {
            tx.rollback().await?;
            // Lost a race: re-read and report the precise rejection.
            let current = self
                .get_invite_by_token(token)
                .await?
                .ok_or(AppError::InvalidInvite(InviteRejection::NotFound))?;
            return match current.validate(Utc::now()) {
                Err(rejection) => Err(rejection.into()),
                Ok(()) => Err(InviteRejection::Exhausted.into()),
            };
        }

        let membership_insert = sqlx::query(
            "INSERT INTO board_memberships (id, board_id, user_id, role_id, joined_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&link.board_id)
        .bind(user_id)
        .bind(&link.role_id)
        .bind(now)
        .execute(&mut *tx)
        .await;

        if let Err(err) = membership_insert {
            tx.rollback().await?;
            if is_unique_violation(&err) {
                // The same user raced their own redemption; the rollback
                // undid this branch's increment, so resolve idempotently.
                return Ok(redeemed);
            }
            return Err(err.into());
        }

        sqlx::query(
            r#"INSERT INTO board_invite_uses
                (id, invite_link_id, user_id, ip_address, user_agent, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&link.id)
        .bind(user_id)
        .bind(&origin.ip_address)
        .bind(&origin.user_agent)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(board_id = %link.board_id, user_id, link_id = %link.id, "invite redeemed");

        Ok(RedeemedInvite {
            already_member: false,
            ..redeemed
        })
    }

    /// List the append-only use ledger for a link, oldest first.
    pub async fn list_invite_uses(&self, link_id: &str) -> Result<Vec<InviteUse>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, invite_link_id, user_id, ip_address, user_agent, created_at
               FROM board_invite_uses WHERE invite_link_id = ?
               ORDER BY created_at"#,
        )
        .bind(link_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(invite_use_from_row).collect())
    }

    /// Count a board's members.
    pub async fn count_board_members(&self, board_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM board_memberships WHERE board_id = ?")
            .bind(board_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("n"))
    }
}

/// Generate an opaque URL-safe invite token from 32 random bytes.
fn generate_invite_token() -> String {
    use base64::Engine;
    use rand::RngCore;

    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Check whether a sqlx error is a unique-constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

// Helper functions for row conversion

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        created_at: row.get("created_at"),
    }
}

fn board_from_row(row: &sqlx::sqlite::SqliteRow) -> Board {
    Board {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        owner_id: row.get("owner_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn role_from_row(row: &sqlx::sqlite::SqliteRow) -> Role {
    let is_system: i32 = row.get("is_system");
    Role {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        board_id: row.get("board_id"),
        is_system: is_system != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn membership_from_row(row: &sqlx::sqlite::SqliteRow) -> Membership {
    Membership {
        id: row.get("id"),
        board_id: row.get("board_id"),
        user_id: row.get("user_id"),
        role_id: row.get("role_id"),
        joined_at: row.get("joined_at"),
    }
}

fn invite_use_from_row(row: &sqlx::sqlite::SqliteRow) -> InviteUse {
    InviteUse {
        id: row.get("id"),
        invite_link_id: row.get("invite_link_id"),
        user_id: row.get("user_id"),
        ip_address: row.get("ip_address"),
        user_agent: row.get("user_agent"),
        created_at: row.get("created_at"),
    }
}

fn invite_link_from_row(row: &sqlx::sqlite::SqliteRow) -> InviteLink {
    let is_active: i32 = row.get("is_active");
    InviteLink {
        id: row.get("id"),
        board_id: row.get("board_id"),
        token: row.get("token"),
        created_by: row.get("created_by"),
        role_id: row.get("role_id"),
        max_uses: row.get("max_uses"),
        use_count: row.get("use_count"),
        expires_at: row.get("expires_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        is_active: is_active != 0,
    }
}
