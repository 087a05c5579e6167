use serde::{Deserialize, Serialize};

/// One simultaneous set of counter readings taken from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterSnapshot {
    /// Odometer reading in kilometers
    pub odometer_km: f64,
    /// Primary fuel counter reading in liters
    pub primary_liters: f64,
    /// Secondary fuel counter reading in liters
    pub secondary_liters: f64,
}

impl MeterSnapshot {
    pub fn new(odometer_km: f64, primary_liters: f64, secondary_liters: f64) -> Self {
        Self {
            odometer_km,
            primary_liters,
            secondary_liters,
        }
    }
}

/// A completed journey segment: snapshots at departure and arrival plus
/// the cargo carried in between.
///
/// Trips are immutable once recorded. No ordering constraint is placed
/// on the readings: an end reading below its start yields a negative
/// distance or consumption, which flows through every derived figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Readings at departure
    pub start: MeterSnapshot,
    /// Readings at arrival
    pub end: MeterSnapshot,
    /// Cargo weight carried during the trip, in kilograms
    pub cargo_kg: f64,
}

impl Trip {
    pub fn new(start: MeterSnapshot, end: MeterSnapshot, cargo_kg: f64) -> Self {
        Self {
            start,
            end,
            cargo_kg,
        }
    }

    /// Distance travelled in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.end.odometer_km - self.start.odometer_km
    }

    /// Liters consumed according to the primary fuel-counting system.
    pub fn consumed_primary(&self) -> f64 {
        self.end.primary_liters - self.start.primary_liters
    }

    /// Liters consumed according to the secondary fuel-counting system.
    pub fn consumed_secondary(&self) -> f64 {
        self.end.secondary_liters - self.start.secondary_liters
    }
}
