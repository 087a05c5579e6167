use serde::{Deserialize, Serialize};

use super::Trip;

/// Fuel-consumption norm: a base allowance per 100 km plus a surcharge
/// per metric ton of cargo. Set once per session and constant across
/// all trips in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormConfig {
    /// Liters per 100 km with zero cargo
    pub base_per_100: f64,
    /// Additional liters per 100 km per metric ton of cargo
    pub extra_per_ton: f64,
}

impl NormConfig {
    pub fn new(base_per_100: f64, extra_per_ton: f64) -> Self {
        Self {
            base_per_100,
            extra_per_ton,
        }
    }

    /// Expected consumption per 100 km for the given cargo weight.
    pub fn per_100(&self, cargo_kg: f64) -> f64 {
        self.base_per_100 + self.extra_per_ton * (cargo_kg / 1000.0)
    }

    /// Expected consumption for a whole trip, scaled linearly by its
    /// actual distance.
    pub fn total_for(&self, trip: &Trip) -> f64 {
        self.per_100(trip.cargo_kg) * (trip.distance_km() / 100.0)
    }

    /// Actual minus expected consumption on the primary counter.
    /// Positive means more fuel was used than the norm predicted.
    pub fn difference_primary(&self, trip: &Trip) -> f64 {
        trip.consumed_primary() - self.total_for(trip)
    }

    /// Actual minus expected consumption on the secondary counter.
    pub fn difference_secondary(&self, trip: &Trip) -> f64 {
        trip.consumed_secondary() - self.total_for(trip)
    }
}

impl Default for NormConfig {
    fn default() -> Self {
        // The fleet's long-standing allowance: 20 l/100km plus 0.4 l
        // per ton of cargo.
        Self::new(20.0, 0.4)
    }
}
