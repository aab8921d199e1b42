//! Trip CRUD and CSV export.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::dtos::trip::{CreateTripRequest, CreateTripResponse, DeleteTripResponse};
use crate::error::AppError;
use crate::models::Trip;
use crate::services::metrics::TRIPS_TOTAL;
use crate::utils::ValidatedJson;
use crate::AppState;

/// List every trip, most recent first, with line items deserialized from
/// their stored form.
pub async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, AppError> {
    let trips = state.db.list_trips().await?;
    Ok(Json(trips))
}

/// Persist a new trip. The financial fields are derived server-side.
pub async fn create_trip(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTripRequest>,
) -> Result<impl IntoResponse, AppError> {
    let trip = req.into_trip();

    state
        .db
        .insert_trip(&trip)
        .await
        .map_err(AppError::storage_rejection)?;

    TRIPS_TOTAL.with_label_values(&["created"]).inc();

    Ok((
        StatusCode::CREATED,
        Json(CreateTripResponse {
            message: "Trip created successfully".to_string(),
            id: trip.id,
        }),
    ))
}

/// Delete a trip by id; unknown ids report 0 changes.
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTripResponse>, AppError> {
    let changes = state
        .db
        .delete_trip(&id)
        .await
        .map_err(AppError::storage_rejection)?;

    if changes > 0 {
        TRIPS_TOTAL.with_label_values(&["deleted"]).inc();
    }

    Ok(Json(DeleteTripResponse {
        message: "Trip deleted".to_string(),
        changes,
    }))
}

/// Flat CSV rendering of the trip table for spreadsheet consumers.
pub async fn export_trips(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trips = state.db.list_trips().await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "id",
            "date",
            "vehicle_no",
            "driver_name",
            "from_city",
            "to_city",
            "revenue",
            "total_expense",
            "profit",
            "notes",
        ])
        .map_err(csv_error)?;

    for trip in &trips {
        writer
            .write_record(&[
                trip.id.clone(),
                trip.date.to_string(),
                trip.vehicle_no.clone(),
                trip.driver_name.clone(),
                trip.from_city.clone(),
                trip.to_city.clone(),
                trip.revenue.to_string(),
                trip.total_expense.to_string(),
                trip.profit.to_string(),
                trip.notes.clone(),
            ])
            .map_err(csv_error)?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("CSV export failed: {}", e)))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    ))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::InternalError(anyhow::anyhow!("CSV export failed: {}", err))
}
