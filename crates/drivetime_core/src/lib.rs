pub mod closest_destination;
pub mod destination;
pub mod drive_time_service;
pub mod error;
pub mod fan_out;

#[cfg(test)]
pub(crate) mod test_utils;
