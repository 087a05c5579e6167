use crate::domain::{MeterSnapshot, NormConfig, Trip, TripLedger};

use super::AppError;
use super::reporting::{SummaryReport, summarize};

/// How the next trip obtains its start readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TripStart {
    /// A separate trip: the driver enters a fresh set of readings.
    Fresh(MeterSnapshot),
    /// Straight continuation: the previous trip's end readings become
    /// the start. Requires at least one recorded trip.
    CarryOver,
}

/// One accounting session: the ledger, the norm it is measured
/// against, and nothing else. All state is explicit; callers own the
/// value and drive it from a single control flow.
#[derive(Debug, Clone)]
pub struct Session {
    ledger: TripLedger,
    norm: NormConfig,
}

impl Session {
    pub fn new(norm: NormConfig) -> Self {
        Self {
            ledger: TripLedger::new(),
            norm,
        }
    }

    /// Build a session over already-recorded trips (batch mode).
    pub fn with_trips<I: IntoIterator<Item = Trip>>(norm: NormConfig, trips: I) -> Self {
        Self {
            ledger: trips.into_iter().collect(),
            norm,
        }
    }

    pub fn norm(&self) -> &NormConfig {
        &self.norm
    }

    pub fn ledger(&self) -> &TripLedger {
        &self.ledger
    }

    /// Resolve the start readings for the chosen mode without
    /// recording anything.
    pub fn resolve_start(&self, start: TripStart) -> Result<MeterSnapshot, AppError> {
        match start {
            TripStart::Fresh(snapshot) => Ok(snapshot),
            TripStart::CarryOver => self
                .ledger
                .carry_over()
                .ok_or(AppError::NoCarryOverReadings),
        }
    }

    /// Record a completed trip and return it. Readings are taken as
    /// given; decreasing counters are not rejected.
    pub fn record_trip(
        &mut self,
        start: TripStart,
        end: MeterSnapshot,
        cargo_kg: f64,
    ) -> Result<Trip, AppError> {
        let start = self.resolve_start(start)?;
        let trip = Trip::new(start, end, cargo_kg);
        self.ledger.add_trip(trip);
        Ok(trip)
    }

    /// Build the full summary for everything recorded so far.
    pub fn summarize(&self) -> SummaryReport {
        summarize(self.ledger.trips(), &self.norm)
    }
}
