use thiserror::Error;

use crate::route::RouteCandidate;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Route set is empty or none of its routes has a leg")]
pub struct InvalidRouteSet;

/// Picks the route with the smallest first-leg duration.
///
/// Ties keep the first route in provider order. Routes without legs are never
/// selected.
pub fn select_best(routes: &[RouteCandidate]) -> Result<&RouteCandidate, InvalidRouteSet> {
    let mut best: Option<(&RouteCandidate, i64)> = None;

    for route in routes {
        let Some(drive_time) = route.drive_time() else {
            continue;
        };

        match best {
            Some((_, best_drive_time)) if best_drive_time <= drive_time => {}
            _ => best = Some((route, drive_time)),
        }
    }

    best.map(|(route, _)| route).ok_or(InvalidRouteSet)
}
