//! Database service for trip-service.

use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::{LineItem, Role, Trip, TripRow, User};
use crate::services::metrics::DB_QUERY_DURATION;
use crate::services::trip_metrics::{calculate_trip_metrics, TripFinancials};
use crate::utils::{hash_password, Password};

/// Password shared by the two demo accounts.
const DEMO_PASSWORD: &str = "password123";

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (and create if missing) the SQLite database behind a pool.
    #[instrument(skip(database_url), fields(service = "trip-service"))]
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        info!(max_connections = max_connections, "Opening SQLite database");

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("SQLite connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Trip Operations
    // -------------------------------------------------------------------------

    /// List all trips, most recent date first.
    #[instrument(skip(self))]
    pub async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_trips"])
            .start_timer();

        let rows = sqlx::query_as::<_, TripRow>(
            r#"
            SELECT id, date, vehicle_no, driver_name, from_city, to_city,
                   revenue, total_expense, profit, income_items, expense_items, notes
            FROM trips
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list trips: {}", e)))?;

        timer.observe_duration();

        Ok(rows.into_iter().map(Trip::from).collect())
    }

    /// Insert a trip under its caller-supplied id. Line items are stored as
    /// serialized JSON text.
    #[instrument(skip(self, trip), fields(trip_id = %trip.id))]
    pub async fn insert_trip(&self, trip: &Trip) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["insert_trip"])
            .start_timer();

        let income_items = serialize_items(&trip.income_items)?;
        let expense_items = serialize_items(&trip.expense_items)?;

        sqlx::query(
            r#"
            INSERT INTO trips (id, date, vehicle_no, driver_name, from_city, to_city,
                               revenue, total_expense, profit, income_items, expense_items, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&trip.id)
        .bind(trip.date)
        .bind(&trip.vehicle_no)
        .bind(&trip.driver_name)
        .bind(&trip.from_city)
        .bind(&trip.to_city)
        .bind(trip.revenue)
        .bind(trip.total_expense)
        .bind(trip.profit)
        .bind(income_items)
        .bind(expense_items)
        .bind(&trip.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to insert trip: {}", e)))?;

        timer.observe_duration();

        info!(trip_id = %trip.id, "Trip inserted");

        Ok(())
    }

    /// Delete a trip by id. Returns the number of rows removed; an unknown
    /// id is reported as 0 rather than an error.
    #[instrument(skip(self), fields(trip_id = %id))]
    pub async fn delete_trip(&self, id: &str) -> Result<u64, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_trip"])
            .start_timer();

        let result = sqlx::query("DELETE FROM trips WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to delete trip: {}", e)))?;

        timer.observe_duration();

        Ok(result.rows_affected())
    }

    // -------------------------------------------------------------------------
    // User Operations
    // -------------------------------------------------------------------------

    /// Look up a user by username.
    #[instrument(skip(self))]
    pub async fn find_user(&self, username: &str) -> Result<Option<User>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["find_user"])
            .start_timer();

        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, name FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to look up user: {}", e)))?;

        timer.observe_duration();

        Ok(user)
    }

    /// Insert a user account.
    #[instrument(skip(self, password_hash))]
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
        name: &str,
    ) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (username, password_hash, role, name) VALUES (?, ?, ?, ?)")
            .bind(username)
            .bind(password_hash)
            .bind(role.as_str())
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to insert user: {}", e)))?;

        info!(username, role = role.as_str(), "User created");

        Ok(())
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to count users: {}", e)))?;
        Ok(count)
    }

    // -------------------------------------------------------------------------
    // Demo Seeding
    // -------------------------------------------------------------------------

    /// Provision the two demo accounts and sample trips. Runs only against a
    /// database with no users yet; otherwise it is a no-op.
    #[instrument(skip(self))]
    pub async fn seed_demo_data(&self) -> Result<(), AppError> {
        if self.count_users().await? > 0 {
            info!("Database already provisioned, skipping seed");
            return Ok(());
        }

        info!("Seeding demo users and sample trips");

        let password = Password::new(DEMO_PASSWORD.to_string());
        let admin_hash = hash_password(&password)?;
        let employee_hash = hash_password(&password)?;

        self.insert_user("admin", admin_hash.as_str(), Role::Admin, "Admin User")
            .await?;
        self.insert_user(
            "employee",
            employee_hash.as_str(),
            Role::Employee,
            "Employee User",
        )
        .await?;

        for trip in sample_trips() {
            self.insert_trip(&trip).await?;
        }

        info!("Demo data seeded");

        Ok(())
    }
}

fn serialize_items(items: &[LineItem]) -> Result<String, AppError> {
    serde_json::to_string(items)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to serialize items: {}", e)))
}

#[allow(clippy::too_many_arguments)]
fn demo_trip(
    id: &str,
    date: NaiveDate,
    driver_name: &str,
    from_city: &str,
    to_city: &str,
    vehicle_no: &str,
    revenue: i64,
    income_items: Vec<LineItem>,
    expense_items: Vec<LineItem>,
) -> Trip {
    let financials = calculate_trip_metrics(TripFinancials {
        revenue: Some(revenue),
        expense_items: expense_items.clone(),
        ..TripFinancials::default()
    });

    Trip {
        id: id.to_string(),
        date,
        vehicle_no: vehicle_no.to_string(),
        driver_name: driver_name.to_string(),
        from_city: from_city.to_string(),
        to_city: to_city.to_string(),
        revenue,
        total_expense: financials.total_expense,
        profit: financials.profit,
        income_items,
        expense_items,
        notes: "Auto-generated trip data.".to_string(),
    }
}

fn sample_trips() -> Vec<Trip> {
    vec![
        demo_trip(
            "BILL-001",
            NaiveDate::from_ymd_opt(2024, 5, 13).expect("valid seed date"),
            "Karthik",
            "Chennai",
            "Bengaluru",
            "AP29AY4288",
            45827,
            vec![
                LineItem::new("Chennai - Bengaluru", 29649),
                LineItem::new("Bengaluru - Chennai", 16178),
            ],
            vec![
                LineItem::new("Pooja Expense", 149),
                LineItem::new("Salem Commission", 2420),
                LineItem::new("Unloading Charges", 5413),
                LineItem::new("Police Charge", 285),
                LineItem::new("Parking Fee", 767),
                LineItem::new("Tarpaulin Rent", 591),
                LineItem::new("Driver Batta", 7668),
                LineItem::new("Toll Charges", 1789),
                LineItem::new("Fuel", 18192),
                LineItem::new("Other Expense", 427),
            ],
        ),
        demo_trip(
            "BILL-100",
            NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid seed date"),
            "Suresh",
            "Hyderabad",
            "Pune",
            "TS23AY3341",
            38680,
            vec![
                LineItem::new("Hyderabad - Pune", 20875),
                LineItem::new("Pune - Hyderabad", 17805),
            ],
            vec![
                LineItem::new("Pooja Expense", 109),
                LineItem::new("Salem Commission", 1422),
                LineItem::new("Unloading Charges", 8387),
                LineItem::new("Police Charge", 415),
                LineItem::new("Parking Fee", 141),
                LineItem::new("Driver Batta", 6828),
                LineItem::new("Toll Charges", 2519),
                LineItem::new("Fuel", 13919),
                LineItem::new("Other Expense", 531),
            ],
        ),
    ]
}
