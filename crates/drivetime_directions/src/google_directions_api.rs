use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    directions_provider::DirectionsProvider,
    measurement::Measurement,
    route::{RouteCandidate, RouteLeg},
    route_selector::{InvalidRouteSet, select_best},
};

pub const GOOGLE_DIRECTIONS_API_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

const STATUS_OK: &str = "OK";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("There was an error performing a request to the directions API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("There was an error deserializing the response from the directions API: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Status of the directions API response was {0}")]
    ProviderStatus(String),

    #[error("The directions API returned no usable route")]
    NoRoute,

    #[error(transparent)]
    InvalidRouteSet(#[from] InvalidRouteSet),
}

/// Subset of a Google Directions response, everything else is ignored.
#[derive(Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<ApiRoute>,
    status: String,
}

#[derive(Deserialize)]
struct ApiRoute {
    /// One leg per pair of consecutive waypoints, a single leg without waypoints
    #[serde(default)]
    legs: Vec<ApiLeg>,
}

#[derive(Deserialize)]
struct ApiLeg {
    /// Text in miles, value in meters
    distance: ApiMeasurement,
    /// Text in hours and minutes, value in seconds
    duration: ApiMeasurement,
}

#[derive(Deserialize)]
struct ApiMeasurement {
    text: String,
    value: i64,
}

impl From<ApiRoute> for RouteCandidate {
    fn from(route: ApiRoute) -> Self {
        RouteCandidate::new(
            route
                .legs
                .into_iter()
                .map(|leg| RouteLeg {
                    distance: Measurement::meters(leg.distance.text, leg.distance.value),
                    duration: Measurement::seconds(leg.duration.text, leg.duration.value),
                })
                .collect(),
        )
    }
}

/// Decodes a directions response body and picks its fastest route.
pub fn parse_directions(body: &[u8]) -> Result<RouteCandidate, GatewayError> {
    let response: DirectionsResponse = serde_json::from_slice(body)?;

    if response.status != STATUS_OK {
        return Err(GatewayError::ProviderStatus(response.status));
    }

    if response.routes.is_empty() {
        return Err(GatewayError::NoRoute);
    }

    let routes: Vec<RouteCandidate> = response
        .routes
        .into_iter()
        .map(RouteCandidate::from)
        .filter(|route| route.first_leg().is_some())
        .collect();

    // A lone route without any drive time is a provider placeholder, not a route
    match routes.as_slice() {
        [] => Err(InvalidRouteSet.into()),
        [route] if route.drive_time() == Some(0) => Err(GatewayError::NoRoute),
        routes => Ok(select_best(routes)?.clone()),
    }
}

pub struct GoogleDirectionsClientParams {
    pub api_key: String,
    pub api_url: String,
    /// Applied to every request, bounds the whole lookup
    pub timeout: Duration,
}

pub struct GoogleDirectionsClient {
    params: GoogleDirectionsClientParams,
    client: reqwest::Client,
}

impl GoogleDirectionsClient {
    pub fn new(params: GoogleDirectionsClientParams) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;

        Ok(Self { params, client })
    }

    async fn request_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteCandidate, GatewayError> {
        let response = self
            .client
            .get(&self.params.api_url)
            .query(&[
                ("key", self.params.api_key.as_str()),
                ("origin", origin),
                ("destination", destination),
                ("alternatives", "true"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;

        debug!(
            "DirectionsApi: Received {} bytes for destination {}",
            body.len(),
            destination
        );

        parse_directions(&body)
    }
}

impl DirectionsProvider for GoogleDirectionsClient {
    async fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteCandidate, GatewayError> {
        self.request_directions(origin, destination).await
    }
}
