use std::future::Future;

use drivetime_directions::{
    google_directions_api::GatewayError, measurement::Measurement, route::RouteCandidate,
};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// All destinations of a request, keyed by id
pub type Directory = FxHashMap<String, Destination>;

/// The external listing of destinations, fetched once per request.
pub trait DestinationDirectory: Send + Sync {
    fn fetch_destinations(&self) -> impl Future<Output = anyhow::Result<Directory>> + Send;
}

/// Outcome of the lookup of a single destination.
#[derive(Debug)]
pub enum DestinationResult {
    Found {
        destination_id: String,
        route: RouteCandidate,
    },
    Failed {
        destination_id: String,
        reason: GatewayError,
    },
}

impl DestinationResult {
    pub fn destination_id(&self) -> &str {
        match self {
            DestinationResult::Found { destination_id, .. }
            | DestinationResult::Failed { destination_id, .. } => destination_id,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DestinationResult::Found { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosestMatch {
    pub destination: Destination,
    pub drive_time: Measurement,
    pub drive_distance: Measurement,
}
