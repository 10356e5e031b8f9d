//! Board membership API endpoints.
//!
//! All mutations require the acting user to be the board owner or an admin
//! member, and the owner's own membership is untouchable through these paths.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{AddMemberRequest, BoardMember, Membership, UpdateMemberRoleRequest};
use crate::AppState;

/// GET /api/boards/:id/members - List a board's members.
pub async fn list_board_members(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Vec<BoardMember>> {
    state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;

    let members = state.repo.list_board_members(&board_id).await?;
    success(members)
}

/// POST /api/boards/:id/members - Add a member to a board.
pub async fn add_member(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path(board_id): Path<String>,
    Json(request): Json<AddMemberRequest>,
) -> ApiResult<Membership> {
    if request.user_id.trim().is_empty() || request.role_id.trim().is_empty() {
        return Err(AppError::Validation(
            "userId and roleId are required".to_string(),
        ));
    }

    let board = state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;
    state.repo.require_board_manager(&board, &actor_id).await?;

    let membership = state.repo.add_member(&board, &request).await?;

    if let Err(err) = state.notifier.member_added(&board, &request.user_id).await {
        tracing::warn!(error = %err, "failed to record member-added notification");
    }

    success(membership)
}

/// PUT /api/boards/:id/members/:user_id - Change a member's role.
pub async fn update_member_role(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((board_id, user_id)): Path<(String, String)>,
    Json(request): Json<UpdateMemberRoleRequest>,
) -> ApiResult<Membership> {
    if request.role_id.trim().is_empty() {
        return Err(AppError::Validation("roleId is required".to_string()));
    }

    let board = state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;
    state.repo.require_board_manager(&board, &actor_id).await?;

    let membership = state
        .repo
        .update_member_role(&board, &user_id, &request.role_id)
        .await?;

    let role_name = state
        .repo
        .get_role(&membership.role_id)
        .await?
        .map(|role| role.name)
        .unwrap_or_else(|| membership.role_id.clone());
    if let Err(err) = state
        .notifier
        .member_role_changed(&board, &user_id, &role_name)
        .await
    {
        tracing::warn!(error = %err, "failed to record role-changed notification");
    }

    success(membership)
}

/// DELETE /api/boards/:id/members/:user_id - Remove a member from a board.
pub async fn remove_member(
    State(state): State<AppState>,
    CurrentUser(actor_id): CurrentUser,
    Path((board_id, user_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let board = state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;
    state.repo.require_board_manager(&board, &actor_id).await?;

    state.repo.remove_member(&board, &user_id).await?;

    if let Err(err) = state.notifier.member_removed(&board, &user_id).await {
        tracing::warn!(error = %err, "failed to record member-removed notification");
    }

    success(())
}
