use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{NormConfig, Trip, round_up};

/// Ceiling-rounded figures for a single trip, in report order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripFigures {
    /// 1-based position of the trip in the ledger
    pub index: usize,
    pub distance_km: f64,
    pub consumed_primary: f64,
    pub consumed_secondary: f64,
    pub norm_total: f64,
    pub difference_primary: f64,
    pub difference_secondary: f64,
}

impl TripFigures {
    pub fn over_norm_primary(&self) -> bool {
        self.difference_primary > 0.0
    }

    pub fn over_norm_secondary(&self) -> bool {
        self.difference_secondary > 0.0
    }
}

/// Full session summary: one entry per trip in insertion order plus
/// the aggregate section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub base_per_100: f64,
    pub extra_per_ton: f64,
    pub trips: Vec<TripFigures>,
    pub total_norm: f64,
    pub total_consumed_primary: f64,
    pub total_consumed_secondary: f64,
    pub total_difference_primary: f64,
    pub total_difference_secondary: f64,
}

/// Walk the trips in insertion order and build the summary.
///
/// Each per-trip figure is ceiling-rounded first; the running totals
/// accumulate those already-rounded values and are rounded once more
/// after accumulation. The aggregate differences are therefore taken
/// over sums of rounded parts, not over the raw sums. That ordering is
/// deliberate: it reproduces the figures drivers have been reporting
/// all along, even where ceiling-rounding the raw sum would disagree
/// by a hundredth.
pub fn summarize(trips: &[Trip], norm: &NormConfig) -> SummaryReport {
    let mut sum_norm = 0.0;
    let mut sum_primary = 0.0;
    let mut sum_secondary = 0.0;

    let figures = trips
        .iter()
        .enumerate()
        .map(|(position, trip)| {
            let norm_total = round_up(norm.total_for(trip));
            let consumed_primary = round_up(trip.consumed_primary());
            let consumed_secondary = round_up(trip.consumed_secondary());

            sum_norm += norm_total;
            sum_primary += consumed_primary;
            sum_secondary += consumed_secondary;

            TripFigures {
                index: position + 1,
                distance_km: round_up(trip.distance_km()),
                consumed_primary,
                consumed_secondary,
                norm_total,
                difference_primary: round_up(norm.difference_primary(trip)),
                difference_secondary: round_up(norm.difference_secondary(trip)),
            }
        })
        .collect();

    let total_norm = round_up(sum_norm);
    let total_consumed_primary = round_up(sum_primary);
    let total_consumed_secondary = round_up(sum_secondary);

    SummaryReport {
        generated_at: Utc::now(),
        base_per_100: norm.base_per_100,
        extra_per_ton: norm.extra_per_ton,
        trips: figures,
        total_norm,
        total_consumed_primary,
        total_consumed_secondary,
        total_difference_primary: round_up(total_consumed_primary - total_norm),
        total_difference_secondary: round_up(total_consumed_secondary - total_norm),
    }
}
