//! Integration tests for the taskboard backend.

use std::sync::Arc;

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::models::{system_roles, CreateInviteRequest};
use crate::notify::Notifier;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    repo: Arc<Repository>,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool.clone()));
        repo.init_system_roles().await.expect("Failed to seed roles");

        let notifier = Arc::new(Notifier::new(pool));

        // Create config
        let config = Config {
            api_psk: Some("test-api-key".to_string()),
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            frontend_url: "http://frontend.test".to_string(),
        };

        let state = AppState {
            repo: repo.clone(),
            notifier,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("x-api-key", "test-api-key".parse().unwrap());

        TestFixture {
            client: Client::builder().default_headers(headers).build().unwrap(),
            base_url,
            repo,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_as(&self, actor: &str, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header("x-user-id", actor)
            .send()
            .await
            .unwrap()
    }

    async fn post_as(&self, actor: &str, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("x-user-id", actor)
            .json(body)
            .send()
            .await
            .unwrap()
    }

    async fn put_as(&self, actor: &str, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .header("x-user-id", actor)
            .json(body)
            .send()
            .await
            .unwrap()
    }

    async fn delete_as(&self, actor: &str, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .header("x-user-id", actor)
            .send()
            .await
            .unwrap()
    }

    async fn create_user(&self, username: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/users"))
            .json(&json!({ "username": username }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"]["id"].as_str().unwrap().to_string()
    }

    async fn create_board(&self, owner_id: &str, name: &str) -> String {
        let resp = self
            .post_as(owner_id, "/api/boards", &json!({ "name": name }))
            .await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"]["id"].as_str().unwrap().to_string()
    }

    /// Resolve a role id from the board's role listing.
    async fn role_id(&self, board_id: &str, name: &str) -> String {
        let resp = self
            .get_as("anyone", &format!("/api/boards/{}/roles", board_id))
            .await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|role| role["name"] == name)
            .unwrap_or_else(|| panic!("role {} not listed", name))["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    /// Create an invite link and return (token, link id, url).
    async fn create_invite(
        &self,
        actor: &str,
        board_id: &str,
        body: Value,
    ) -> (String, String, String) {
        let resp = self
            .post_as(actor, &format!("/api/boards/{}/invites", board_id), &body)
            .await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        (
            body["data"]["token"].as_str().unwrap().to_string(),
            body["data"]["id"].as_str().unwrap().to_string(),
            body["data"]["url"].as_str().unwrap().to_string(),
        )
    }

    async fn redeem(&self, actor: &str, token: &str) -> reqwest::Response {
        self.post_as(actor, &format!("/api/invites/{}/redeem", token), &json!({}))
            .await
    }

    /// Current use count of a link, read via the active-links listing.
    async fn use_count(&self, owner: &str, board_id: &str, link_id: &str) -> i64 {
        let resp = self
            .get_as(owner, &format!("/api/boards/{}/invites", board_id))
            .await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|link| link["id"] == link_id)
            .expect("link not listed")["useCount"]
            .as_i64()
            .unwrap()
    }

    async fn member_count(&self, board_id: &str) -> usize {
        let resp = self
            .get_as("anyone", &format!("/api/boards/{}/members", board_id))
            .await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"].as_array().unwrap().len()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_auth_missing_psk() {
    let fixture = TestFixture::new().await;

    // Request without API key
    let resp = Client::new()
        .get(fixture.url("/api/boards"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_actor_required() {
    let fixture = TestFixture::new().await;

    // PSK is present but no acting user
    let resp = fixture
        .client
        .post(fixture.url("/api/boards"))
        .json(&json!({ "name": "No Actor" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_user_crud() {
    let fixture = TestFixture::new().await;

    let user_id = fixture.create_user("alice").await;

    let resp = fixture
        .client
        .get(fixture.url(&format!("/api/users/{}", user_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["username"], "alice");

    // Duplicate username
    let dup = fixture
        .client
        .post(fixture.url("/api/users"))
        .json(&json!({ "username": "alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(dup.status(), 409);
    let dup_body: Value = dup.json().await.unwrap();
    assert_eq!(dup_body["error"]["code"], "CONFLICT");

    // Empty username
    let invalid = fixture
        .client
        .post(fixture.url("/api/users"))
        .json(&json!({ "username": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), 400);
}

#[tokio::test]
async fn test_system_roles_seed_is_idempotent() {
    let fixture = TestFixture::new().await;

    // Fixture already seeded once at startup; seed again
    fixture.repo.init_system_roles().await.unwrap();
    fixture.repo.init_system_roles().await.unwrap();

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "Seeded").await;

    let resp = fixture
        .get_as(&owner, &format!("/api/boards/{}/roles", board_id))
        .await;
    let body: Value = resp.json().await.unwrap();
    let roles = body["data"].as_array().unwrap();

    for name in ["ADMIN", "EDITOR", "VIEWER"] {
        let count = roles.iter().filter(|role| role["name"] == name).count();
        assert_eq!(count, 1, "expected exactly one {} role", name);
    }
}

#[tokio::test]
async fn test_board_create_makes_owner_admin() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "My Board").await;

    let resp = fixture
        .get_as(&owner, &format!("/api/boards/{}/members", board_id))
        .await;
    let body: Value = resp.json().await.unwrap();
    let members = body["data"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["userId"], Value::String(owner.clone()));
    assert_eq!(members[0]["roleName"], "ADMIN");
}

#[tokio::test]
async fn test_owner_membership_is_protected() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "Protected").await;
    let viewer_role = fixture.role_id(&board_id, "VIEWER").await;

    // Owner cannot have their role changed, even by themselves
    let update = fixture
        .put_as(
            &owner,
            &format!("/api/boards/{}/members/{}", board_id, owner),
            &json!({ "roleId": viewer_role }),
        )
        .await;
    assert_eq!(update.status(), 403);
    let update_body: Value = update.json().await.unwrap();
    assert_eq!(update_body["error"]["code"], "PERMISSION_DENIED");

    // Owner cannot be removed
    let remove = fixture
        .delete_as(&owner, &format!("/api/boards/{}/members/{}", board_id, owner))
        .await;
    assert_eq!(remove.status(), 403);
    let remove_body: Value = remove.json().await.unwrap();
    assert_eq!(remove_body["error"]["code"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_member_lifecycle() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let member = fixture.create_user("bob").await;
    let board_id = fixture.create_board(&owner, "Team Board").await;
    let viewer_role = fixture.role_id(&board_id, "VIEWER").await;
    let editor_role = fixture.role_id(&board_id, "EDITOR").await;

    // Add
    let add = fixture
        .post_as(
            &owner,
            &format!("/api/boards/{}/members", board_id),
            &json!({ "userId": member, "roleId": viewer_role }),
        )
        .await;
    assert_eq!(add.status(), 200);
    assert_eq!(fixture.member_count(&board_id).await, 2);

    // Duplicate add is a conflict
    let dup = fixture
        .post_as(
            &owner,
            &format!("/api/boards/{}/members", board_id),
            &json!({ "userId": member, "roleId": viewer_role }),
        )
        .await;
    assert_eq!(dup.status(), 409);
    let dup_body: Value = dup.json().await.unwrap();
    assert_eq!(dup_body["error"]["code"], "CONFLICT");

    // Change role
    let update = fixture
        .put_as(
            &owner,
            &format!("/api/boards/{}/members/{}", board_id, member),
            &json!({ "roleId": editor_role }),
        )
        .await;
    assert_eq!(update.status(), 200);
    let update_body: Value = update.json().await.unwrap();
    assert_eq!(update_body["data"]["roleId"], Value::String(editor_role.clone()));

    // Remove
    let remove = fixture
        .delete_as(&owner, &format!("/api/boards/{}/members/{}", board_id, member))
        .await;
    assert_eq!(remove.status(), 200);
    assert_eq!(fixture.member_count(&board_id).await, 1);

    // Removing again is NotFound
    let again = fixture
        .delete_as(&owner, &format!("/api/boards/{}/members/{}", board_id, member))
        .await;
    assert_eq!(again.status(), 404);

    // The member saw the whole lifecycle in their notifications
    let notifications = fixture.get_as(&member, "/api/notifications").await;
    let notif_body: Value = notifications.json().await.unwrap();
    let kinds: Vec<&str> = notif_body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"member_added"));
    assert!(kinds.contains(&"member_role_changed"));
    assert!(kinds.contains(&"member_removed"));
}

#[tokio::test]
async fn test_member_management_requires_privilege() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let outsider = fixture.create_user("mallory").await;
    let target = fixture.create_user("carol").await;
    let board_id = fixture.create_board(&owner, "Locked Board").await;
    let viewer_role = fixture.role_id(&board_id, "VIEWER").await;

    let resp = fixture
        .post_as(
            &outsider,
            &format!("/api/boards/{}/members", board_id),
            &json!({ "userId": target, "roleId": viewer_role }),
        )
        .await;
    assert_eq!(resp.status(), 403);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_invite_create_validation() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "Validated").await;

    let zero_uses = fixture
        .post_as(
            &owner,
            &format!("/api/boards/{}/invites", board_id),
            &json!({ "maxUses": 0 }),
        )
        .await;
    assert_eq!(zero_uses.status(), 400);
    let zero_body: Value = zero_uses.json().await.unwrap();
    assert_eq!(zero_body["error"]["code"], "VALIDATION_ERROR");

    let past = (Utc::now() - Duration::hours(1)).to_rfc3339();
    let past_expiry = fixture
        .post_as(
            &owner,
            &format!("/api/boards/{}/invites", board_id),
            &json!({ "expiresAt": past }),
        )
        .await;
    assert_eq!(past_expiry.status(), 400);
}

#[tokio::test]
async fn test_invite_create_and_list() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "Shared Board").await;

    let (token, link_id, url) = fixture
        .create_invite(&owner, &board_id, json!({ "maxUses": 5 }))
        .await;
    assert_eq!(url, format!("http://frontend.test/invite/{}", token));

    let list = fixture
        .get_as(&owner, &format!("/api/boards/{}/invites", board_id))
        .await;
    let list_body: Value = list.json().await.unwrap();
    let links = list_body["data"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["id"], Value::String(link_id.clone()));
    assert_eq!(links[0]["maxUses"], 5);
    assert_eq!(links[0]["useCount"], 0);

    // Deactivated links disappear from the listing and refuse redemption
    let deactivate = fixture
        .delete_as(&owner, &format!("/api/invites/{}", link_id))
        .await;
    assert_eq!(deactivate.status(), 200);

    let list_after = fixture
        .get_as(&owner, &format!("/api/boards/{}/invites", board_id))
        .await;
    let list_after_body: Value = list_after.json().await.unwrap();
    assert!(list_after_body["data"].as_array().unwrap().is_empty());

    let joiner = fixture.create_user("joiner").await;
    let redeem = fixture.redeem(&joiner, &token).await;
    assert_eq!(redeem.status(), 410);
    let redeem_body: Value = redeem.json().await.unwrap();
    assert_eq!(redeem_body["error"]["code"], "INVITE_INACTIVE");
}

#[tokio::test]
async fn test_redeem_single_use_link() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let alice = fixture.create_user("alice").await;
    let bob = fixture.create_user("bob").await;
    let board_id = fixture.create_board(&owner, "One Seat").await;

    let (token, link_id, _) = fixture
        .create_invite(&owner, &board_id, json!({ "maxUses": 1 }))
        .await;

    // First redemption succeeds
    let first = fixture.redeem(&alice, &token).await;
    assert_eq!(first.status(), 200);
    let first_body: Value = first.json().await.unwrap();
    assert_eq!(first_body["data"]["alreadyMember"], false);
    assert_eq!(first_body["data"]["boardId"], Value::String(board_id.clone()));
    assert_eq!(first_body["data"]["roleName"], "EDITOR");
    assert_eq!(fixture.use_count(&owner, &board_id, &link_id).await, 1);
    assert_eq!(fixture.member_count(&board_id).await, 2);

    // Second user hits the exhausted budget
    let second = fixture.redeem(&bob, &token).await;
    assert_eq!(second.status(), 410);
    let second_body: Value = second.json().await.unwrap();
    assert_eq!(second_body["error"]["code"], "INVITE_EXHAUSTED");
    assert_eq!(fixture.member_count(&board_id).await, 2);

    // The creator was told about the join
    let notifications = fixture.get_as(&owner, "/api/notifications").await;
    let notif_body: Value = notifications.json().await.unwrap();
    assert!(notif_body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|n| n["kind"] == "invite_accepted"));

    // Exactly one ledger entry, for the successful join
    let uses = fixture
        .get_as(&owner, &format!("/api/invites/{}/uses", link_id))
        .await;
    assert_eq!(uses.status(), 200);
    let uses_body: Value = uses.json().await.unwrap();
    let entries = uses_body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["userId"], Value::String(alice.clone()));
}

#[tokio::test]
async fn test_redeem_already_member_is_idempotent() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let alice = fixture.create_user("alice").await;
    let board_id = fixture.create_board(&owner, "Reclick Board").await;

    let (token, link_id, _) = fixture
        .create_invite(&owner, &board_id, json!({}))
        .await;

    let first = fixture.redeem(&alice, &token).await;
    assert_eq!(first.status(), 200);
    let first_body: Value = first.json().await.unwrap();
    assert_eq!(first_body["data"]["alreadyMember"], false);

    // Re-clicking the same link: same answer, no new state
    for _ in 0..2 {
        let again = fixture.redeem(&alice, &token).await;
        assert_eq!(again.status(), 200);
        let again_body: Value = again.json().await.unwrap();
        assert_eq!(again_body["data"]["alreadyMember"], true);
    }

    assert_eq!(fixture.use_count(&owner, &board_id, &link_id).await, 1);
    assert_eq!(fixture.member_count(&board_id).await, 2);

    // Re-clicks leave no trace in the ledger
    let uses = fixture
        .get_as(&owner, &format!("/api/invites/{}/uses", link_id))
        .await;
    let uses_body: Value = uses.json().await.unwrap();
    assert_eq!(uses_body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_redeem_expired_link() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let alice = fixture.create_user("alice").await;
    let board_id = fixture.create_board(&owner, "Expired Board").await;

    // The API layer refuses past expiries, so plant one via the repository
    let board = fixture.repo.get_board(&board_id).await.unwrap().unwrap();
    let role = fixture
        .repo
        .get_system_role_by_name(system_roles::EDITOR)
        .await
        .unwrap();
    let link = fixture
        .repo
        .create_invite_link(
            &board,
            &owner,
            &role,
            &CreateInviteRequest {
                role_id: None,
                max_uses: Some(100),
                expires_at: Some(Utc::now() - Duration::seconds(1)),
            },
        )
        .await
        .unwrap();

    // Expired wins regardless of the remaining use budget
    let resp = fixture.redeem(&alice, &link.token).await;
    assert_eq!(resp.status(), 410);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVITE_EXPIRED");
    assert_eq!(fixture.member_count(&board_id).await, 1);
}

#[tokio::test]
async fn test_redeem_unknown_token() {
    let fixture = TestFixture::new().await;

    let user = fixture.create_user("alice").await;
    let resp = fixture.redeem(&user, "no-such-token").await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVITE_NOT_FOUND");
}

#[tokio::test]
async fn test_deactivate_requires_creator_or_owner() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let member = fixture.create_user("bob").await;
    let board_id = fixture.create_board(&owner, "Guarded Links").await;

    let (token, link_id, _) = fixture
        .create_invite(&owner, &board_id, json!({}))
        .await;

    // Join as a plain member first
    let join = fixture.redeem(&member, &token).await;
    assert_eq!(join.status(), 200);

    // A non-creator, non-owner member may not deactivate
    let denied = fixture
        .delete_as(&member, &format!("/api/invites/{}", link_id))
        .await;
    assert_eq!(denied.status(), 403);
    let denied_body: Value = denied.json().await.unwrap();
    assert_eq!(denied_body["error"]["code"], "PERMISSION_DENIED");

    // The creator may
    let allowed = fixture
        .delete_as(&owner, &format!("/api/invites/{}", link_id))
        .await;
    assert_eq!(allowed.status(), 200);
}

#[tokio::test]
async fn test_inspect_invite_does_not_consume() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "Preview Board").await;

    let (token, link_id, _) = fixture
        .create_invite(&owner, &board_id, json!({ "maxUses": 1 }))
        .await;

    for _ in 0..3 {
        let resp = fixture
            .client
            .get(fixture.url(&format!("/api/invites/{}", token)))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["boardName"], "Preview Board");
        assert_eq!(body["data"]["roleName"], "EDITOR");
        assert_eq!(body["data"]["memberCount"], 1);
    }

    assert_eq!(fixture.use_count(&owner, &board_id, &link_id).await, 0);
}

#[tokio::test]
async fn test_concurrent_redemptions_respect_max_uses() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "Two Seats").await;
    let (token, link_id, _) = fixture
        .create_invite(&owner, &board_id, json!({ "maxUses": 2 }))
        .await;

    let mut users = Vec::new();
    for name in ["u1", "u2", "u3", "u4"] {
        users.push(fixture.create_user(name).await);
    }

    // Four callers race a budget of two
    let (r1, r2, r3, r4) = tokio::join!(
        fixture.redeem(&users[0], &token),
        fixture.redeem(&users[1], &token),
        fixture.redeem(&users[2], &token),
        fixture.redeem(&users[3], &token),
    );

    let statuses: Vec<u16> = [r1, r2, r3, r4].iter().map(|r| r.status().as_u16()).collect();
    let successes = statuses.iter().filter(|&&s| s == 200).count();
    let exhausted = statuses.iter().filter(|&&s| s == 410).count();

    assert_eq!(successes, 2, "statuses: {:?}", statuses);
    assert_eq!(exhausted, 2, "statuses: {:?}", statuses);
    assert_eq!(fixture.use_count(&owner, &board_id, &link_id).await, 2);
    // Owner plus exactly two joiners
    assert_eq!(fixture.member_count(&board_id).await, 3);
}

#[tokio::test]
async fn test_redeem_requires_authentication() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let board_id = fixture.create_board(&owner, "Login First").await;
    let (token, _, _) = fixture.create_invite(&owner, &board_id, json!({})).await;

    // No x-user-id header: prompt for login instead of rejecting the link
    let resp = fixture
        .client
        .post(fixture.url(&format!("/api/invites/{}/redeem", token)))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_board_delete_cascades_to_links() {
    let fixture = TestFixture::new().await;

    let owner = fixture.create_user("owner").await;
    let member = fixture.create_user("bob").await;
    let board_id = fixture.create_board(&owner, "Doomed Board").await;
    let (token, _, _) = fixture.create_invite(&owner, &board_id, json!({})).await;

    // Only the owner may delete
    let denied = fixture
        .delete_as(&member, &format!("/api/boards/{}", board_id))
        .await;
    assert_eq!(denied.status(), 403);

    let deleted = fixture
        .delete_as(&owner, &format!("/api/boards/{}", board_id))
        .await;
    assert_eq!(deleted.status(), 200);

    // The link went with the board
    let resp = fixture.redeem(&member, &token).await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVITE_NOT_FOUND");
}
