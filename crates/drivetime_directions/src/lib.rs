pub mod directions_provider;
pub mod google_directions_api;
pub mod measurement;
pub mod route;
pub mod route_selector;

#[cfg(test)]
pub(crate) mod test_utils;
