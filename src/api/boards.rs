//! Board API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{Board, CreateBoardRequest};
use crate::AppState;

/// GET /api/boards - List all boards.
pub async fn list_boards(State(state): State<AppState>) -> ApiResult<Vec<Board>> {
    let boards = state.repo.list_boards().await?;
    success(boards)
}

/// GET /api/boards/:id - Get a single board.
pub async fn get_board(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Board> {
    let board = state
        .repo
        .get_board(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", id)))?;
    success(board)
}

/// POST /api/boards - Create a board owned by the acting user.
pub async fn create_board(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateBoardRequest>,
) -> ApiResult<Board> {
    // Validate required fields
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Board name is required".to_string()));
    }

    let board = state.repo.create_board(&request, &user_id).await?;
    success(board)
}

/// DELETE /api/boards/:id - Delete a board. Owner only.
pub async fn delete_board(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let board = state
        .repo
        .get_board(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", id)))?;

    if board.owner_id != user_id {
        return Err(AppError::PermissionDenied(
            "Only the board owner may delete the board".to_string(),
        ));
    }

    state.repo.delete_board(&id).await?;
    success(())
}
