//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use grimoire_domain::{PlayerId, PlayerSnapshot};
use grimoire_shared::{
    CreatePlayerRequest, MessageResponse, PhaseActionRequest, PlayerResponse,
    RecordInformationRequest, RosterCreatedResponse, ScriptResponse, UpdatePlayerRequest,
};

use crate::app::App;
use crate::infrastructure::ports::{RosterFile, RosterFileError};
use crate::use_cases::RosterError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/script", get(get_script))
        .route("/api/player/{id}", get(get_player).post(update_player))
        .route("/api/player/{id}/info", post(record_information))
        .route("/api/player/{id}/phase", post(apply_phase_action))
        .route("/api/players/create", post(create_roster))
}

/// `?file=<roster>.json`
#[derive(Debug, Deserialize)]
struct FileQuery {
    file: Option<String>,
}

impl FileQuery {
    fn roster_file(self) -> Result<RosterFile, ApiError> {
        Ok(RosterFile::from_query(self.file)?)
    }
}

type IdPath = Result<Path<Uuid>, PathRejection>;

fn player_id(path: IdPath) -> Result<PlayerId, ApiError> {
    let Path(id) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(PlayerId::from_uuid(id))
}

/// Unwrap a JSON body, turning axum's rejection into a JSON 400.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

async fn health() -> &'static str {
    "OK"
}

async fn get_script(State(app): State<Arc<App>>) -> Json<ScriptResponse> {
    let script = app.use_cases.roster.script();
    Json(ScriptResponse {
        name: script.name().to_string(),
        characters: script.characters().iter().map(|c| (**c).clone()).collect(),
    })
}

async fn get_player(
    State(app): State<Arc<App>>,
    id: IdPath,
    Query(query): Query<FileQuery>,
) -> Result<Json<PlayerSnapshot>, ApiError> {
    let file = query.roster_file()?;
    let id = player_id(id)?;
    let player = app.use_cases.roster.get_player(&file, id).await?;
    Ok(Json(player.snapshot()))
}

async fn update_player(
    State(app): State<Arc<App>>,
    id: IdPath,
    Query(query): Query<FileQuery>,
    body: Result<Json<UpdatePlayerRequest>, JsonRejection>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let file = query.roster_file()?;
    let id = player_id(id)?;
    let update = json_body(body)?;
    let player = app.use_cases.roster.update_player(&file, id, update).await?;
    Ok(Json(PlayerResponse {
        message: "Player updated successfully".to_string(),
        player: player.snapshot(),
    }))
}

async fn record_information(
    State(app): State<Arc<App>>,
    id: IdPath,
    Query(query): Query<FileQuery>,
    body: Result<Json<RecordInformationRequest>, JsonRejection>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let file = query.roster_file()?;
    let id = player_id(id)?;
    let request = json_body(body)?;
    let player = app
        .use_cases
        .roster
        .record_information(&file, id, request)
        .await?;
    Ok(Json(PlayerResponse {
        message: "Information recorded".to_string(),
        player: player.snapshot(),
    }))
}

async fn apply_phase_action(
    State(app): State<Arc<App>>,
    id: IdPath,
    Query(query): Query<FileQuery>,
    body: Result<Json<PhaseActionRequest>, JsonRejection>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let file = query.roster_file()?;
    let id = player_id(id)?;
    let action = json_body(body)?;
    let player = app
        .use_cases
        .roster
        .apply_phase_action(&file, id, action)
        .await?;
    Ok(Json(PlayerResponse {
        message: "Phase updated".to_string(),
        player: player.snapshot(),
    }))
}

async fn create_roster(
    State(app): State<Arc<App>>,
    Query(query): Query<FileQuery>,
    body: Result<Json<Vec<CreatePlayerRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<RosterCreatedResponse>), ApiError> {
    let file = query.roster_file()?;
    let Json(requests) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected roster body");
        ApiError::BadRequest("Request body must be an array of players.".to_string())
    })?;

    app.use_cases.roster.create_roster(&file, requests).await?;

    Ok((
        StatusCode::CREATED,
        Json(RosterCreatedResponse {
            message: format!("New players created and saved to {}.", file),
            file_name: file.to_string(),
        }),
    ))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<RosterFileError> for ApiError {
    fn from(e: RosterFileError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<RosterError> for ApiError {
    fn from(e: RosterError) -> Self {
        match e {
            RosterError::NotFound { entity_type, .. } => {
                ApiError::NotFound(format!("{} not found", entity_type))
            }
            RosterError::InvalidInput(msg) => ApiError::BadRequest(msg),
            RosterError::File(e) => e.into(),
            // Rule violations come from the request: unknown characters,
            // invalid names, out-of-order phases.
            RosterError::Domain(e) => ApiError::BadRequest(e.to_string()),
            RosterError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}
