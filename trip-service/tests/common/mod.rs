//! Shared helpers for trip-service integration tests.

#![allow(dead_code)]

use std::time::Duration;

use tempfile::TempDir;
use trip_service::{
    build_router,
    config::{DatabaseSettings, OcrSettings, ServerSettings, Settings},
    models::Role,
    services::{AuthService, Database, OcrScanner},
    utils::{hash_password, Password},
    AppState,
};

pub const TEST_PASSWORD: &str = "password123";

/// Test application with a running HTTP server over a throwaway SQLite
/// database.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub db: Database,
    _db_dir: TempDir,
}

impl TestApp {
    /// Spin the service up on an ephemeral port with fresh migrations and no
    /// demo data.
    pub async fn spawn() -> Self {
        let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = db_dir.path().join("trips.sqlite");
        let db_url = format!("sqlite://{}", db_path.display());

        let db = Database::connect(&db_url, 5)
            .await
            .expect("Failed to open test database");
        db.run_migrations().await.expect("Failed to run migrations");

        let config = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
                allowed_origins: vec![],
                log_level: "info".to_string(),
            },
            database: DatabaseSettings {
                url: db_url,
                max_connections: 5,
                seed_demo_data: false,
            },
            ocr: OcrSettings { scan_delay_ms: 0 },
        };

        let auth = AuthService::new(db.clone()).expect("Failed to build auth service");
        let state = AppState {
            config,
            db: db.clone(),
            auth,
            scanner: OcrScanner::new(Duration::ZERO),
        };
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().expect("No local addr"));

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
            db,
            _db_dir: db_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Provision a user directly in the store with [`TEST_PASSWORD`].
    pub async fn create_user(&self, username: &str, role: Role, name: &str) {
        let hash = hash_password(&Password::new(TEST_PASSWORD.to_string()))
            .expect("Failed to hash password");
        self.db
            .insert_user(username, hash.as_str(), role, name)
            .await
            .expect("Failed to insert user");
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }
}

/// Minimal valid trip payload with itemized income and expenses.
pub fn sample_trip_payload(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "date": "2024-05-13",
        "vehicle_no": "TN54Q1234",
        "driverName": "Suresh",
        "from_city": "Salem",
        "to_city": "Chennai",
        "revenue": 47700,
        "incomeItems": [
            { "description": "Salem - Chennai", "amount": 16000 },
            { "description": "Chennai - Salem", "amount": 31700 }
        ],
        "expenseItems": [
            { "description": "Pooja Expense", "amount": 50 },
            { "description": "Fuel", "amount": 15000 }
        ],
        "notes": "Standard trip."
    })
}
