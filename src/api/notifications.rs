//! Notification API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::auth::CurrentUser;
use crate::models::Notification;
use crate::AppState;

/// GET /api/notifications - List the acting user's notifications.
pub async fn list_notifications(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Vec<Notification>> {
    let notifications = state.notifier.list_for_user(&user_id).await?;
    success(notifications)
}
