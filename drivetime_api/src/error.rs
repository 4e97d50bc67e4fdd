use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use drivetime_core::error::DriveTimeError;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

pub enum ApiError {
    BadRequest(String),
    Unauthorized { access_key: String },
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Map<String, Value>>,
}

impl From<DriveTimeError> for ApiError {
    fn from(error: DriveTimeError) -> Self {
        match error {
            DriveTimeError::NoRouteFound => ApiError::BadRequest(error.to_string()),
            DriveTimeError::DirectoryInconsistency(_) | DriveTimeError::Directory(_) => {
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, parameters) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Unauthorized { access_key } => (
                StatusCode::UNAUTHORIZED,
                String::from(
                    "Your Access could not be verified. Please check your Access Key and try again.",
                ),
                Some(Map::from_iter([(
                    String::from("access_key"),
                    Value::String(access_key),
                )])),
            ),
            ApiError::InternalServerError(message) => {
                error!("Internal server error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        (
            status,
            Json(ErrorBody {
                message,
                parameters,
            }),
        )
            .into_response()
    }
}
