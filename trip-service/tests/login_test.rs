//! Login and session lifecycle tests for trip-service.

mod common;

use common::{TestApp, TEST_PASSWORD};
use trip_service::models::Role;

#[tokio::test]
async fn login_succeeds_with_valid_credentials() {
    let app = TestApp::spawn().await;
    app.create_user("admin", Role::Admin, "Admin User").await;

    let response = app
        .post_json(
            "/api/login",
            &serde_json::json!({ "username": "admin", "password": TEST_PASSWORD }),
        )
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["username"], "admin");
    assert_eq!(body["name"], "Admin User");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn unknown_username_and_wrong_password_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.create_user("employee", Role::Employee, "Employee User")
        .await;

    let unknown_user = app
        .post_json(
            "/api/login",
            &serde_json::json!({ "username": "nobody", "password": TEST_PASSWORD }),
        )
        .await;
    let unknown_status = unknown_user.status();
    let unknown_body: serde_json::Value = unknown_user.json().await.expect("Invalid JSON");

    let wrong_password = app
        .post_json(
            "/api/login",
            &serde_json::json!({ "username": "employee", "password": "letmein" }),
        )
        .await;
    let wrong_status = wrong_password.status();
    let wrong_body: serde_json::Value = wrong_password.json().await.expect("Invalid JSON");

    assert_eq!(unknown_status, 401);
    assert_eq!(wrong_status, 401);
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = TestApp::spawn().await;

    let missing_password = app
        .post_json("/api/login", &serde_json::json!({ "username": "admin" }))
        .await;
    assert_eq!(missing_password.status(), 400);

    let missing_username = app
        .post_json("/api/login", &serde_json::json!({ "password": "password123" }))
        .await;
    assert_eq!(missing_username.status(), 400);

    let empty_password = app
        .post_json(
            "/api/login",
            &serde_json::json!({ "username": "admin", "password": "" }),
        )
        .await;
    assert!(empty_password.status().is_client_error());
}

#[tokio::test]
async fn session_survives_login_and_dies_on_logout() {
    let app = TestApp::spawn().await;
    app.create_user("admin", Role::Admin, "Admin User").await;

    // Cookie-holding client: the session travels in the session cookie.
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client");

    let before_login = client
        .get(app.url("/api/session"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(before_login.status(), 401);

    let login = client
        .post(app.url("/api/login"))
        .json(&serde_json::json!({ "username": "admin", "password": TEST_PASSWORD }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(login.status(), 200);

    let restored = client
        .get(app.url("/api/session"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(restored.status(), 200);
    let body: serde_json::Value = restored.json().await.expect("Invalid JSON");
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "admin");

    let logout = client
        .post(app.url("/api/logout"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(logout.status(), 200);

    let after_logout = client
        .get(app.url("/api/session"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(after_logout.status(), 401);
}
