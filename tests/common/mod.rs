// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use tripnorm::application::{Session, TripStart};
use tripnorm::domain::{MeterSnapshot, NormConfig};

pub fn snapshot(odometer_km: f64, primary_liters: f64, secondary_liters: f64) -> MeterSnapshot {
    MeterSnapshot::new(odometer_km, primary_liters, secondary_liters)
}

/// A session with the default norm (20 l/100km + 0.4 l/t) and no trips.
pub fn default_session() -> Session {
    Session::new(NormConfig::default())
}

/// A session holding the standard two-trip fixture:
/// - trip 1: 100 km with one ton of cargo, consumed 25 l / 24.8 l
///   (norm 20.40 l)
/// - trip 2: continuation, 73.2 km with two tons, consumed 16 l / 14 l
///   (norm rounds to 15.23 l)
pub fn two_trip_session() -> Session {
    let mut session = default_session();
    session
        .record_trip(
            TripStart::Fresh(snapshot(0.0, 0.0, 0.0)),
            snapshot(100.0, 25.0, 24.8),
            1000.0,
        )
        .unwrap();
    session
        .record_trip(TripStart::CarryOver, snapshot(173.2, 41.0, 38.8), 2000.0)
        .unwrap();
    session
}
