use crate::GeostampError;
use crate::features::{encode_base64, guess_format};
use crate::server::AppState;
use crate::server::serializers::{
    ErrorOut, Health, MSG_INVALID_JSON, MSG_OK, StampIn, StampOut,
};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};

pub const SERVICE_NAME: &str = "geostamp";

/// Everything a handler can fail with.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Stamp(#[from] GeostampError),

    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Stamp(GeostampError::InvalidCoordinate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Stamp(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Stamp(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stamp(e) => e.kind(),
            Self::Worker(_) => "internal",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Stamp(GeostampError::InvalidInput(msg)) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(kind = self.kind(), error = %self, "request failed");
        } else {
            warn!(kind = self.kind(), error = %self, "request rejected");
        }
        let body = ErrorOut {
            status: "error",
            error: self.kind(),
            mensaje: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: SERVICE_NAME,
    })
}

/// `POST /procesar`: stamps GPS and capture metadata into a base64 photo.
///
/// The body is taken raw so malformed JSON gets the same error envelope
/// as every other failure.
pub async fn procesar(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StampOut>, ApiError> {
    let input: StampIn = serde_json::from_slice(&body)
        .map_err(|_| GeostampError::InvalidInput(MSG_INVALID_JSON.to_string()))?;
    let request = input.into_request(Utc::now())?;
    info!(
        bytes = request.image.len(),
        format = ?guess_format(&request.image),
        latitude = request.coordinate.latitude,
        longitude = request.coordinate.longitude,
        "stamping image"
    );

    let stamper = state.stamper.clone();
    let result = tokio::task::spawn_blocking(move || {
        stamper.stamp(
            &request.image,
            request.coordinate,
            request.captured_at,
            &mut rand::rng(),
        )
    })
    .await??;

    info!(filename = %result.filename, bytes = result.image.len(), "image stamped");
    Ok(Json(StampOut {
        status: "ok",
        mensaje: MSG_OK,
        filename: result.filename,
        image_base64: encode_base64(&result.image),
    }))
}
