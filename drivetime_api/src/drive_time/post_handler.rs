use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use drivetime_core::destination::ClosestMatch;
use drivetime_directions::measurement::Measurement;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct DriveTimeRequestBody {
    /// The starting address given by the user
    address: String,
}

#[derive(Serialize)]
pub struct DriveTimeResponse {
    drive_time: Measurement,
    /// Distance of the route with the shortest drive time
    drive_distance: Measurement,
    location_name: String,
    start_address: String,
    destination_address: String,
}

impl DriveTimeResponse {
    fn new(closest: ClosestMatch, start_address: String) -> Self {
        Self {
            drive_time: closest.drive_time,
            drive_distance: closest.drive_distance,
            location_name: closest.destination.name,
            start_address,
            destination_address: closest.destination.address,
        }
    }
}

/// The body is decoded by hand so that clients don't need to send a JSON content type.
pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DriveTimeResponse>, ApiError> {
    let body: DriveTimeRequestBody = serde_json::from_slice(&body).map_err(|err| {
        ApiError::BadRequest(format!(
            "The request body you provided could not be deserialized: {err}"
        ))
    })?;

    let closest = state.drive_time.closest_destination(&body.address).await?;

    Ok(Json(DriveTimeResponse::new(closest, body.address)))
}
