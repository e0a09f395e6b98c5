use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use axum::extract::State;
use axum::response::{ErrorResponse, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Local};
use http::StatusCode;
use log::{debug, info};
use mirror_model::meter::{AdviceType, RatingSystem, UselessMeter};
use mirror_model::session::SessionSummary;
use mirror_model::{Context, Mood, PersonaId, UselessnessLevel};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::therapist::config::Config;
use crate::therapist::Therapist;

struct AppState {
    therapist: Therapist,
}

type AppStateArg = State<Arc<AppState>>;

fn bad_request(msg: impl Display) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, msg.to_string()).into()
}

const DEFAULT_SESSION_ID: &str = "default";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RespondBody {
    message: Option<String>,
    style: Option<String>,
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TherapyResponse {
    id: i64,
    user_message: String,
    response: String,
    style: PersonaId,
    uselessness_level: UselessnessLevel,
    uselessness_label: &'static str,
    context: Context,
    mood: Mood,
    advice_type: AdviceType,
    useless_meter: UselessMeter,
    timestamp: DateTime<Local>,
    session_id: String,
}

async fn respond(
    State(state): AppStateArg,
    Json(body): Json<RespondBody>,
) -> axum::response::Result<Json<TherapyResponse>> {
    debug!("respond(style: {:?}, session: {:?})", body.style, body.session_id);
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| bad_request("No message provided"))?;
    let reply = state.therapist.generate_reply(
        &message,
        body.style.as_deref(),
        body.session_id.as_deref(),
        &mut rand::thread_rng(),
    );
    let session_id = body
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());
    let timestamp = Local::now();
    Ok(Json(TherapyResponse {
        id: timestamp.timestamp_millis(),
        user_message: message,
        advice_type: AdviceType::classify(&reply.text),
        useless_meter: UselessMeter::measure(&reply.text),
        response: reply.text,
        style: PersonaId::from_id_or_default(body.style.as_deref()),
        uselessness_level: reply.uselessness_level,
        uselessness_label: reply.uselessness_label,
        context: reply.context,
        mood: reply.mood,
        timestamp,
        session_id,
    }))
}

async fn styles(State(state): AppStateArg) -> impl IntoResponse {
    debug!("styles()");
    Json(state.therapist.styles())
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    #[serde(default)]
    levels: Vec<u8>,
}

async fn summary(Json(body): Json<SummaryBody>) -> axum::response::Result<Json<SessionSummary>> {
    debug!("summary({:?})", body);
    let levels = body
        .levels
        .into_iter()
        .map(UselessnessLevel::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(bad_request)?;
    Ok(Json(SessionSummary::from_levels(&levels)))
}

async fn ratings() -> impl IntoResponse {
    debug!("ratings()");
    Json(RatingSystem::describe())
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Local>,
}

async fn health() -> impl IntoResponse {
    Json(Health {
        status: "healthy",
        message: "Server is running and ready to provide questionable advice",
        timestamp: Local::now(),
    })
}

fn router(therapist: Therapist, static_serving_dir: &Path) -> Router {
    let shared_state = Arc::new(AppState { therapist });
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health))
                .route("/therapy/respond", post(respond))
                .route("/therapy/styles", get(styles))
                .route("/therapy/summary", post(summary))
                .route("/therapy/ratings", get(ratings))
                .with_state(shared_state),
        )
        .fallback_service(ServeDir::new(static_serving_dir))
}

pub async fn serve(config: Config, therapist: Therapist) -> anyhow::Result<()> {
    let app = router(therapist, &config.static_serving_dir);
    let listener = tokio::net::TcpListener::bind(&config.serving_addr)
        .await
        .with_context(|| format!("Cannot bind {}", config.serving_addr))?;
    info!("Listening on {}", config.serving_addr);
    axum::serve(listener, app)
        .await
        .context("Api server failed")
}
