//! # Test Helpers
//!
//! Client construction against a `wiremock` backend and fixture payloads.

#![allow(dead_code)]

use std::time::Duration;

use blog_client::services::api::ApiClient;
use blog_client::session::{MemoryStorage, SessionStore, SharedSession};
use lib_auth::{encode_claims, Claims};
use serde_json::{json, Value};
use shared::AuthUser;
use wiremock::MockServer;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

/// Access token for `user_id` valid until 2100
pub fn token(user_id: &str, email: Option<&str>, role: Option<&str>) -> String {
    let claims = Claims {
        user_id: user_id.to_string(),
        email: email.map(str::to_string),
        role: role.map(str::to_string),
        exp: 4_102_444_800,
        iat: Some(1_700_000_000),
        token_type: Some("access".to_string()),
        jti: None,
    };
    encode_claims(&claims, TEST_SECRET).expect("Token encoding should succeed in test")
}

/// Client without a session
pub fn signed_out(server: &MockServer) -> ApiClient {
    let session = SessionStore::new(MemoryStorage::new()).shared();
    ApiClient::new(server.uri(), Duration::from_secs(5), session)
}

/// Client with an established session; returns the bearer token too
pub fn signed_in(server: &MockServer) -> (ApiClient, String) {
    let client = signed_out(server);
    let access = token("u1", Some("a@b.com"), Some("author"));
    establish(client.session(), &access);
    (client, access)
}

pub fn establish(session: &SharedSession, access: &str) {
    let profile = AuthUser {
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        ..Default::default()
    };
    session
        .write()
        .set_session(access, None, &profile)
        .expect("Session should be established in test");
}

pub fn post_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "content": format!("{} body", title),
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-02T08:30:00Z",
        "category": {"id": "c1", "name": "Automation", "slug": "automation"},
        "tags": [{"id": "t1", "name": "CRM", "slug": "crm"}],
        "status": "published"
    })
}

pub fn resource_json(id: &str, tool: &str) -> Value {
    json!({
        "id": id,
        "title": "CRM sync",
        "description": "Sync leads",
        "tool": tool,
        "file": format!("/media/resources/{}.json", id),
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-01T10:00:00Z"
    })
}

pub fn login_json(access: &str) -> Value {
    json!({
        "refresh": "refresh-token",
        "access": access,
        "user": {
            "id": "u1",
            "email": "a@b.com",
            "first_name": "Ana",
            "last_name": "Lopez",
            "role": "author"
        }
    })
}
