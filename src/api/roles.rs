//! Role API endpoints.
//!
//! System roles are immutable through the API: the only mutation exposed
//! here is creating a custom board-scoped role.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{CreateRoleRequest, Role};
use crate::AppState;

/// GET /api/boards/:id/roles - List system roles plus the board's custom roles.
pub async fn list_board_roles(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Vec<Role>> {
    state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;

    let roles = state.repo.list_board_roles(&board_id).await?;
    success(roles)
}

/// POST /api/boards/:id/roles - Create a custom role scoped to the board.
pub async fn create_board_role(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(board_id): Path<String>,
    Json(request): Json<CreateRoleRequest>,
) -> ApiResult<Role> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Role name is required".to_string()));
    }

    let board = state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;
    state.repo.require_board_manager(&board, &user_id).await?;

    let role = state.repo.create_board_role(&board_id, &request).await?;
    success(role)
}
