//! Common test utilities
//!
//! Spins up the full application over a fresh SQLite file and wraps the
//! register/login round trips every suite needs.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use babel_arcana::server::{create_app, Config};

/// Signing secret shared by every test server
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a server over a fresh database
///
/// Returns the TempDir alongside the server; dropping it deletes the
/// database file, so keep it bound for the duration of the test.
pub async fn spawn_app() -> (TestServer, TempDir) {
    let data_dir = TempDir::new().expect("failed to create temp dir");
    let database_url = format!("sqlite://{}", data_dir.path().join("test.db").display());

    let config = Config {
        port: 0,
        database_url,
        jwt_secret: TEST_JWT_SECRET.to_string(),
    };
    let app = create_app(config).await.expect("failed to build app");

    let server = TestServer::new(app).expect("failed to build test server");
    (server, data_dir)
}

/// Register an account, asserting success
pub async fn register_user(server: &TestServer, name: &str, email: &str, password: &str) {
    let response = server
        .post("/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
            "password_confirmation": password,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

/// Log in, asserting success, and return the bearer token
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}

/// Register and log in, returning the bearer token
pub async fn register_and_login(server: &TestServer, email: &str, password: &str) -> String {
    register_user(server, "Test User", email, password).await;
    login_user(server, email, password).await
}
