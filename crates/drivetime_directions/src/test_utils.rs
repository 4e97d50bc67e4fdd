use crate::{
    measurement::Measurement,
    route::{RouteCandidate, RouteLeg},
};

pub fn create_route(seconds: i64, meters: i64) -> RouteCandidate {
    RouteCandidate::new(vec![RouteLeg {
        distance: Measurement::meters(format!("{meters} m"), meters),
        duration: Measurement::seconds(format!("{seconds} s"), seconds),
    }])
}
