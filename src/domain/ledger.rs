use super::{MeterSnapshot, Trip};

/// An ordered, append-only sequence of trips. Created empty at session
/// start; trips are never removed or mutated after append, and every
/// report walks them in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TripLedger {
    trips: Vec<Trip>,
}

impl TripLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trip. No field constraints apply; always succeeds.
    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// End readings of the most recent trip, if any. These become the
    /// start readings when the next trip continues straight on.
    pub fn carry_over(&self) -> Option<MeterSnapshot> {
        self.trips.last().map(|trip| trip.end)
    }
}

impl FromIterator<Trip> for TripLedger {
    fn from_iter<I: IntoIterator<Item = Trip>>(iter: I) -> Self {
        Self {
            trips: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(start_km: f64, end_km: f64) -> Trip {
        Trip::new(
            MeterSnapshot::new(start_km, 0.0, 0.0),
            MeterSnapshot::new(end_km, 10.0, 10.0),
            0.0,
        )
    }

    #[test]
    fn test_starts_empty() {
        let ledger = TripLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.carry_over().is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut ledger = TripLedger::new();
        ledger.add_trip(trip(0.0, 50.0));
        ledger.add_trip(trip(50.0, 120.0));
        ledger.add_trip(trip(120.0, 121.0));

        let starts: Vec<f64> = ledger
            .trips()
            .iter()
            .map(|t| t.start.odometer_km)
            .collect();
        assert_eq!(starts, vec![0.0, 50.0, 120.0]);
    }

    #[test]
    fn test_carry_over_is_last_end() {
        let mut ledger = TripLedger::new();
        ledger.add_trip(trip(0.0, 50.0));
        ledger.add_trip(trip(50.0, 120.0));

        let carry = ledger.carry_over().unwrap();
        assert_eq!(carry.odometer_km, 120.0);
    }
}
