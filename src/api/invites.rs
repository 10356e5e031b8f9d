//! Invite link API endpoints.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use chrono::Utc;

use super::{success, ApiResult};
use crate::auth::CurrentUser;
use crate::errors::{AppError, InviteRejection};
use crate::models::{
    system_roles, CreateInviteRequest, InviteLinkDescriptor, InvitePreview, InviteUse,
    OriginMetadata, RedeemResponse,
};
use crate::AppState;

/// POST /api/boards/:id/invites - Create an invite link for a board.
pub async fn create_invite(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(board_id): Path<String>,
    Json(request): Json<CreateInviteRequest>,
) -> ApiResult<InviteLinkDescriptor> {
    // Precondition checks owned by this layer; the service below assumes them
    if let Some(max_uses) = request.max_uses {
        if max_uses < 1 {
            return Err(AppError::Validation(
                "maxUses must be at least 1".to_string(),
            ));
        }
    }
    if let Some(expires_at) = request.expires_at {
        if expires_at <= Utc::now() {
            return Err(AppError::Validation(
                "expiresAt must be in the future".to_string(),
            ));
        }
    }

    let board = state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;
    state.repo.require_board_manager(&board, &user_id).await?;

    let role = match &request.role_id {
        Some(role_id) => state.repo.resolve_board_role(&board_id, role_id).await?,
        None => {
            state
                .repo
                .get_system_role_by_name(system_roles::EDITOR)
                .await?
        }
    };

    let link = state
        .repo
        .create_invite_link(&board, &user_id, &role, &request)
        .await?;
    let url = link.share_url(&state.config.frontend_url);

    success(InviteLinkDescriptor { link, url })
}

/// GET /api/boards/:id/invites - List a board's active invite links.
pub async fn list_board_invites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(board_id): Path<String>,
) -> ApiResult<Vec<InviteLinkDescriptor>> {
    let board = state
        .repo
        .get_board(&board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;
    state.repo.require_board_manager(&board, &user_id).await?;

    let links = state.repo.list_board_invites(&board_id).await?;
    let descriptors = links
        .into_iter()
        .map(|link| {
            let url = link.share_url(&state.config.frontend_url);
            InviteLinkDescriptor { link, url }
        })
        .collect();

    success(descriptors)
}

/// GET /api/invites/:id/uses - The link's redemption ledger.
pub async fn list_invite_uses(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Vec<InviteUse>> {
    let link = state
        .repo
        .get_invite_link(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Invite link {} not found", id)))?;
    let board = state
        .repo
        .get_board(&link.board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", link.board_id)))?;
    state.repo.require_board_manager(&board, &user_id).await?;

    let uses = state.repo.list_invite_uses(&id).await?;
    success(uses)
}

/// DELETE /api/invites/:id - Deactivate an invite link.
pub async fn deactivate_invite(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.deactivate_link(&id, &user_id).await?;
    success(())
}

/// GET /api/invites/:token - Inspect an invite link without redeeming it.
pub async fn inspect_invite(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<InvitePreview> {
    let link = state
        .repo
        .get_invite_by_token(&token)
        .await?
        .ok_or(AppError::InvalidInvite(InviteRejection::NotFound))?;
    link.validate(Utc::now())?;

    let board = state
        .repo
        .get_board(&link.board_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", link.board_id)))?;
    let role = state
        .repo
        .get_role(&link.role_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", link.role_id)))?;
    let member_count = state.repo.count_board_members(&board.id).await?;

    success(InvitePreview {
        board_id: board.id,
        board_name: board.name,
        role_name: role.name,
        member_count,
    })
}

/// POST /api/invites/:token/redeem - Redeem an invite token to join its board.
pub async fn redeem_invite(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(token): Path<String>,
    headers: HeaderMap,
) -> ApiResult<RedeemResponse> {
    let origin = origin_from_headers(&headers);

    let redeemed = state.repo.redeem_invite(&token, &user_id, &origin).await?;

    if !redeemed.already_member {
        notify_creator(&state, &redeemed.link_creator_id, &redeemed.board_id, &user_id).await;
    }

    success(redeemed.into())
}

/// Tell the link's creator that someone joined through their link.
async fn notify_creator(state: &AppState, creator_id: &str, board_id: &str, new_user_id: &str) {
    let board = match state.repo.get_board(board_id).await {
        Ok(Some(board)) => board,
        _ => return,
    };
    let username = match state.repo.get_user(new_user_id).await {
        Ok(Some(user)) => user.username,
        _ => new_user_id.to_string(),
    };

    if let Err(err) = state
        .notifier
        .invite_accepted(creator_id, &board, &username)
        .await
    {
        tracing::warn!(error = %err, "failed to record invite-accepted notification");
    }
}

/// Origin metadata for the use ledger, best effort from request headers.
fn origin_from_headers(headers: &HeaderMap) -> OriginMetadata {
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    OriginMetadata {
        ip_address,
        user_agent,
    }
}
