use std::future::Future;

use crate::{google_directions_api::GatewayError, route::RouteCandidate};

/// Answers one routing query between two free-form addresses.
pub trait DirectionsProvider: Send + Sync {
    fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<RouteCandidate, GatewayError>> + Send;
}
