use drivetime_directions::directions_provider::DirectionsProvider;
use futures::future::join_all;
use tracing::debug;

use crate::destination::{Destination, DestinationResult};

/// Looks up the route from `origin` to every destination concurrently.
///
/// One lookup is started per destination and every lookup is awaited, failed
/// ones included, so the output always holds exactly one result per
/// destination, in input order. There is no deadline besides the transport
/// timeout of the provider and no lookup is cancelled once started.
pub async fn collect<'a, P, I>(provider: &P, origin: &str, destinations: I) -> Vec<DestinationResult>
where
    P: DirectionsProvider,
    I: IntoIterator<Item = &'a Destination>,
{
    let lookups = destinations
        .into_iter()
        .map(|destination| async move {
            match provider.fetch_route(origin, &destination.address).await {
                Ok(route) => DestinationResult::Found {
                    destination_id: destination.id.clone(),
                    route,
                },
                Err(reason) => DestinationResult::Failed {
                    destination_id: destination.id.clone(),
                    reason,
                },
            }
        })
        .collect::<Vec<_>>();

    debug!("FanOut: Looking up {} destinations", lookups.len());

    join_all(lookups).await
}
