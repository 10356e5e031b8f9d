//! Invite link and use-ledger models.
//!
//! Link status is derived, never stored: `is_active` is the manual
//! kill-switch, expiry and exhaustion are computed from the raw fields at
//! validation time. Every caller derives status through [`InviteLink::validate`]
//! so the state machine lives in exactly one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::InviteRejection;

/// A shareable invite token granting board membership with a pre-set role.
///
/// Never hard-deleted; deactivation flips `is_active` and is irreversible
/// through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteLink {
    pub id: String,
    pub board_id: String,
    pub token: String,
    pub created_by: String,
    /// Role granted to users who redeem this link
    pub role_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i64>,
    pub use_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl InviteLink {
    /// Check if the link's expiry timestamp has passed.
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }

    /// Check if the link's use budget is spent.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        match self.max_uses {
            Some(max_uses) => self.use_count >= max_uses,
            None => false,
        }
    }

    /// The validity predicate: active AND not expired AND not exhausted.
    ///
    /// Rejections are reported in the order inactive, expired, exhausted so
    /// diagnostics are deterministic when several conditions fail at once.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), InviteRejection> {
        if !self.is_active {
            return Err(InviteRejection::Inactive);
        }
        if self.is_expired(now) {
            return Err(InviteRejection::Expired);
        }
        if self.is_exhausted() {
            return Err(InviteRejection::Exhausted);
        }
        Ok(())
    }

    /// Shareable URL for this link.
    pub fn share_url(&self, frontend_base: &str) -> String {
        format!("{}/invite/{}", frontend_base.trim_end_matches('/'), self.token)
    }
}

/// Append-only ledger entry recording one successful first-time redemption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUse {
    pub id: String,
    pub invite_link_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating an invite link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInviteRequest {
    /// Role granted on redemption; defaults to the system EDITOR role
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub max_uses: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Invite link plus its shareable URL, as returned by create/list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteLinkDescriptor {
    #[serde(flatten)]
    pub link: InviteLink,
    pub url: String,
}

/// Non-mutating preview of a link for the invite landing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitePreview {
    pub board_id: String,
    pub board_name: String,
    pub role_name: String,
    pub member_count: i64,
}

/// Origin metadata recorded in the use ledger.
#[derive(Debug, Clone, Default)]
pub struct OriginMetadata {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Outcome of a redemption, as resolved by the repository.
#[derive(Debug, Clone)]
pub struct RedeemedInvite {
    pub board_id: String,
    pub role_id: String,
    pub role_name: String,
    pub already_member: bool,
    pub link_id: String,
    pub link_creator_id: String,
}

/// Redemption result returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemResponse {
    pub board_id: String,
    pub role_id: String,
    pub role_name: String,
    pub already_member: bool,
}

impl From<RedeemedInvite> for RedeemResponse {
    fn from(redeemed: RedeemedInvite) -> Self {
        Self {
            board_id: redeemed.board_id,
            role_id: redeemed.role_id,
            role_name: redeemed.role_name,
            already_member: redeemed.already_member,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link() -> InviteLink {
        let now = Utc::now();
        InviteLink {
            id: "link-1".to_string(),
            board_id: "board-1".to_string(),
            token: "tok".to_string(),
            created_by: "user-1".to_string(),
            role_id: "role-1".to_string(),
            max_uses: None,
            use_count: 0,
            expires_at: None,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    #[test]
    fn valid_link_passes() {
        assert!(link().validate(Utc::now()).is_ok());
    }

    #[test]
    fn inactive_wins_over_expired_and_exhausted() {
        let mut l = link();
        l.is_active = false;
        l.expires_at = Some(Utc::now() - Duration::hours(1));
        l.max_uses = Some(1);
        l.use_count = 1;
        assert_eq!(l.validate(Utc::now()), Err(InviteRejection::Inactive));
    }

    #[test]
    fn expired_wins_over_exhausted() {
        let mut l = link();
        l.expires_at = Some(Utc::now() - Duration::seconds(1));
        l.max_uses = Some(1);
        l.use_count = 1;
        assert_eq!(l.validate(Utc::now()), Err(InviteRejection::Expired));
    }

    #[test]
    fn expired_regardless_of_remaining_budget() {
        let mut l = link();
        l.expires_at = Some(Utc::now() - Duration::seconds(1));
        l.max_uses = Some(100);
        l.use_count = 0;
        assert_eq!(l.validate(Utc::now()), Err(InviteRejection::Expired));
    }

    #[test]
    fn exhausted_when_use_count_reaches_max() {
        let mut l = link();
        l.max_uses = Some(3);
        l.use_count = 2;
        assert!(l.validate(Utc::now()).is_ok());
        l.use_count = 3;
        assert_eq!(l.validate(Utc::now()), Err(InviteRejection::Exhausted));
    }

    #[test]
    fn unlimited_uses_never_exhaust() {
        let mut l = link();
        l.use_count = 1_000_000;
        assert!(l.validate(Utc::now()).is_ok());
    }

    #[test]
    fn share_url_joins_frontend_base() {
        let l = link();
        assert_eq!(
            l.share_url("https://boards.example.com/"),
            "https://boards.example.com/invite/tok"
        );
        assert_eq!(
            l.share_url("https://boards.example.com"),
            "https://boards.example.com/invite/tok"
        );
    }
}
