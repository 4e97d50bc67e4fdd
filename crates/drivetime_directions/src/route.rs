use crate::measurement::Measurement;

/// One origin to destination segment of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    pub distance: Measurement,
    pub duration: Measurement,
}

/// A route proposed by the directions provider.
///
/// Only the first leg is ever evaluated, itineraries with waypoints are not
/// decomposed further.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteCandidate {
    pub legs: Vec<RouteLeg>,
}

impl RouteCandidate {
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }

    pub fn first_leg(&self) -> Option<&RouteLeg> {
        self.legs.first()
    }

    /// Drive time of the first leg in seconds, `None` for a route without legs.
    pub fn drive_time(&self) -> Option<i64> {
        self.first_leg().map(|leg| leg.duration.raw_value)
    }
}
