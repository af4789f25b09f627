use crate::config::Config;
use crate::errors::AppError;
use crate::models::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Application configuration.
    pub config: Config,
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-leads-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/leads
///
/// Creates a lead. `name` and `email` must be present and non-empty; the
/// remaining fields are optional. A missing or empty `status` is stored as
/// "New".
///
/// # Returns
///
/// * `Result<Json<CreateLeadResponse>, AppError>` - The new row id, or an error.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LeadPayload>,
) -> Result<Json<CreateLeadResponse>, AppError> {
    tracing::info!("POST /api/leads - name: {:?}", payload.name);

    if !payload.has_required_fields() {
        return Err(AppError::BadRequest(
            "Name and email are required".to_string(),
        ));
    }

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO leads (name, email, phone, company, status, notes) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.company)
    .bind(payload.status_or_default())
    .bind(&payload.notes)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Lead {} created", id);

    Ok(Json(CreateLeadResponse {
        message: "Lead created successfully".to_string(),
        id,
    }))
}

/// GET /api/leads
///
/// Lists every lead, newest first.
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeadsResponse>, AppError> {
    tracing::info!("GET /api/leads");

    let leads = sqlx::query_as::<_, Lead>("SELECT * FROM leads ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(LeadsResponse { leads }))
}

/// GET /api/leads/:id
///
/// Retrieves a single lead by its id.
pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<LeadResponse>, AppError> {
    tracing::info!("GET /api/leads/{}", id);

    let lead = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))?;

    Ok(Json(LeadResponse { lead }))
}

/// PUT /api/leads/:id
///
/// Overwrites all six mutable columns with the submitted values. Omitted
/// fields are written as NULL; `created_at` and `id` never change.
pub async fn update_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<LeadPayload>,
) -> Result<Json<ChangesResponse>, AppError> {
    tracing::info!("PUT /api/leads/{}", id);

    // TODO: unlike create there is no name/email check here, so a partial
    // body nulls every omitted column. Make validation symmetric once
    // clients stop depending on that.
    let result = sqlx::query(
        "UPDATE leads SET name = $1, email = $2, phone = $3, company = $4, \
         status = $5, notes = $6 WHERE id = $7",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.company)
    .bind(&payload.status)
    .bind(&payload.notes)
    .bind(id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Lead not found".to_string()));
    }

    tracing::info!("Lead {} updated", id);

    Ok(Json(ChangesResponse {
        message: "Lead updated successfully".to_string(),
        changes: result.rows_affected(),
    }))
}

/// DELETE /api/leads/:id
///
/// Removes a lead. Hard delete; there is no tombstone.
pub async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ChangesResponse>, AppError> {
    tracing::info!("DELETE /api/leads/{}", id);

    let result = sqlx::query("DELETE FROM leads WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Lead not found".to_string()));
    }

    tracing::info!("Lead {} deleted", id);

    Ok(Json(ChangesResponse {
        message: "Lead deleted successfully".to_string(),
        changes: result.rows_affected(),
    }))
}

/// GET /
///
/// Serves the frontend entry page. Other assets under `public/` are handled
/// by the static-file fallback in the router.
pub async fn serve_frontend() -> impl IntoResponse {
    match tokio::fs::read_to_string("public/index.html").await {
        Ok(content) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
            content,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Frontend entry page not found").into_response(),
    }
}
