use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::ApiError, state::AppState};

pub const ACCESS_KEY_HEADER: &str = "Access-Key";

/// Rejects requests whose Access-Key header does not match the configured key.
pub async fn require_access_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let access_key = request
        .headers()
        .get(ACCESS_KEY_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();

    if state.access_key.is_empty() || access_key != state.access_key {
        return Err(ApiError::Unauthorized { access_key });
    }

    Ok(next.run(request).await)
}
