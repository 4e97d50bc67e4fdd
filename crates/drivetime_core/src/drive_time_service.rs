use drivetime_directions::directions_provider::DirectionsProvider;
use tracing::{debug, info};

use crate::{
    closest_destination::reduce,
    destination::{ClosestMatch, DestinationDirectory},
    error::DriveTimeError,
    fan_out::collect,
};

/// Finds the destination with the shortest drive time from a starting address.
///
/// A request fetches the directory, looks up every destination and only then
/// reduces the results. A directory failure ends the request immediately.
pub struct DriveTimeService<D, P> {
    directory: D,
    directions: P,
}

impl<D, P> DriveTimeService<D, P>
where
    D: DestinationDirectory,
    P: DirectionsProvider,
{
    pub fn new(directory: D, directions: P) -> Self {
        Self {
            directory,
            directions,
        }
    }

    pub async fn closest_destination(
        &self,
        starting_address: &str,
    ) -> Result<ClosestMatch, DriveTimeError> {
        let directory = self
            .directory
            .fetch_destinations()
            .await
            .map_err(DriveTimeError::Directory)?;

        debug!("DriveTime: Fetched {} destinations", directory.len());

        let results = collect(&self.directions, starting_address, directory.values()).await;

        let closest = reduce(results, &directory)?;

        info!(
            "DriveTime: Closest destination is {} ({})",
            closest.destination.name, closest.drive_time.display_text
        );

        Ok(closest)
    }
}
