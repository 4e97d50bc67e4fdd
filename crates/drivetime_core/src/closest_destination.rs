use drivetime_directions::route::RouteCandidate;
use tracing::warn;

use crate::{
    destination::{ClosestMatch, DestinationResult, Directory},
    error::DriveTimeError,
};

/// Reduces the lookups of a request to the destination with the shortest drive time.
///
/// Failed lookups are logged and dropped. On equal drive times the first
/// result in iteration order wins.
pub fn reduce(
    results: Vec<DestinationResult>,
    directory: &Directory,
) -> Result<ClosestMatch, DriveTimeError> {
    let mut closest: Option<(String, RouteCandidate, i64)> = None;

    for result in results {
        let (destination_id, route) = match result {
            DestinationResult::Found {
                destination_id,
                route,
            } => (destination_id, route),
            DestinationResult::Failed {
                destination_id,
                reason,
            } => {
                warn!("No route to destination {}: {}", destination_id, reason);
                continue;
            }
        };

        let Some(drive_time) = route.drive_time() else {
            warn!("Route to destination {} has no legs", destination_id);
            continue;
        };

        let is_closer = closest
            .as_ref()
            .is_none_or(|(_, _, closest_drive_time)| drive_time < *closest_drive_time);

        if is_closer {
            closest = Some((destination_id, route, drive_time));
        }
    }

    let (destination_id, route, _) = closest.ok_or(DriveTimeError::NoRouteFound)?;

    let Some(destination) = directory.get(&destination_id) else {
        return Err(DriveTimeError::DirectoryInconsistency(destination_id));
    };

    let Some(leg) = route.legs.into_iter().next() else {
        return Err(DriveTimeError::NoRouteFound);
    };

    Ok(ClosestMatch {
        destination: destination.clone(),
        drive_time: leg.duration,
        drive_distance: leg.distance,
    })
}
