use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use drivetime_directions::{
    directions_provider::DirectionsProvider,
    google_directions_api::GatewayError,
    measurement::Measurement,
    route::{RouteCandidate, RouteLeg},
};

use fxhash::FxHashMap;

use crate::destination::{Destination, DestinationDirectory, DestinationResult, Directory};

pub fn create_route(seconds: i64, meters: i64) -> RouteCandidate {
    RouteCandidate::new(vec![RouteLeg {
        distance: Measurement::meters(format!("{meters} m"), meters),
        duration: Measurement::seconds(format!("{seconds} s"), seconds),
    }])
}

pub fn create_directory(names: &[&str]) -> Directory {
    names
        .iter()
        .map(|&name| {
            let destination = Destination {
                id: format!("kitchen-{}", name.to_lowercase()),
                name: name.to_string(),
                address: format!("1 Main Street, {name}"),
            };

            (destination.id.clone(), destination)
        })
        .collect()
}

pub fn found(destination_id: &str, seconds: i64, meters: i64) -> DestinationResult {
    DestinationResult::Found {
        destination_id: destination_id.to_string(),
        route: create_route(seconds, meters),
    }
}

pub fn failed(destination_id: &str, status: &str) -> DestinationResult {
    DestinationResult::Failed {
        destination_id: destination_id.to_string(),
        reason: GatewayError::ProviderStatus(status.to_string()),
    }
}

pub enum MockOutcome {
    Route(RouteCandidate),
    Status(&'static str),
    Malformed,
}

/// Answers lookups by destination address, after an optional delay.
pub struct MockDirections {
    pub outcomes: FxHashMap<String, MockOutcome>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl MockDirections {
    pub fn new(outcomes: Vec<(String, MockOutcome)>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl DirectionsProvider for MockDirections {
    async fn fetch_route(
        &self,
        _origin: &str,
        destination: &str,
    ) -> Result<RouteCandidate, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.outcomes.get(destination) {
            Some(MockOutcome::Route(route)) => Ok(route.clone()),
            Some(MockOutcome::Status(status)) => {
                Err(GatewayError::ProviderStatus(status.to_string()))
            }
            Some(MockOutcome::Malformed) => Err(GatewayError::Decode(
                serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            )),
            None => Err(GatewayError::NoRoute),
        }
    }
}

pub struct MockDirectory {
    pub directory: Option<Directory>,
}

impl DestinationDirectory for MockDirectory {
    async fn fetch_destinations(&self) -> anyhow::Result<Directory> {
        self.directory
            .clone()
            .ok_or_else(|| anyhow::anyhow!("kitchen API is unavailable"))
    }
}
