use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriveTimeError {
    #[error("no routes were found from your starting address")]
    NoRouteFound,

    #[error("Destination {0} of the closest route is missing from the directory")]
    DirectoryInconsistency(String),

    #[error("Destinations could not be fetched: {0:#}")]
    Directory(anyhow::Error),
}
