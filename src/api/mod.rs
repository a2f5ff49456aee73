use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Multipart};
use axum::routing::post;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::*;
use crate::services::StudyCoach;
use crate::state::AppState;
use crate::upload;

const PARSE_FAILED: &str = "Failed to parse syllabus";
const PLAN_FAILED: &str = "Failed to generate plan";
const QUESTIONS_FAILED: &str = "Failed to generate questions";
const TRACKER_FAILED: &str = "Failed to analyze assignments";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/syllabus/parse", post(parse_syllabus))
        .route("/api/syllabus/plan", post(generate_plan))
        .route("/api/questions", post(generate_questions))
        .route("/api/tracker/analyze", post(analyze_tracker))
        .with_state(state)
}

/// The API plus static assets and the HTTP layers used when serving for real.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    router(state)
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn parse_syllabus(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SyllabusRecord>, AppError> {
    let input = upload::read_syllabus_form(multipart?, &state.upload_dir)
        .await
        .map_err(|e| e.during(PARSE_FAILED))?;
    let coach = StudyCoach::new(state.gateway.clone());
    let record = coach
        .parse_syllabus(&input)
        .await
        .map_err(|e| e.during(PARSE_FAILED))?;
    Ok(Json(record))
}

async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<StudyPlan>, AppError> {
    let Json(req) = payload?;
    let coach = StudyCoach::new(state.gateway.clone());
    let plan = coach
        .generate_plan(&req)
        .await
        .map_err(|e| e.during(PLAN_FAILED))?;
    Ok(Json(plan))
}

async fn generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<PracticeRequest>, JsonRejection>,
) -> Result<Json<PracticeSet>, AppError> {
    let Json(req) = payload?;
    let coach = StudyCoach::new(state.gateway.clone());
    let set = coach
        .generate_practice(&req)
        .await
        .map_err(|e| e.during(QUESTIONS_FAILED))?;
    Ok(Json(set))
}

async fn analyze_tracker(
    State(state): State<AppState>,
    payload: Result<Json<TrackerRequest>, JsonRejection>,
) -> Result<Json<AssignmentTracker>, AppError> {
    let Json(req) = payload?;
    let coach = StudyCoach::new(state.gateway.clone());
    let tracker = coach
        .analyze_tracker(&req)
        .await
        .map_err(|e| e.during(TRACKER_FAILED))?;
    Ok(Json(tracker))
}
