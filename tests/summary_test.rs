mod common;

use common::{default_session, snapshot, two_trip_session};
use tripnorm::application::TripStart;

#[test]
fn test_two_trip_summary_figures() {
    let report = two_trip_session().summarize();

    assert_eq!(report.trips.len(), 2);

    let first = &report.trips[0];
    assert_eq!(first.index, 1);
    assert_eq!(first.distance_km, 100.0);
    assert_eq!(first.consumed_primary, 25.0);
    assert_eq!(first.norm_total, 20.4);
    assert!(first.over_norm_primary());

    let second = &report.trips[1];
    assert_eq!(second.index, 2);
    assert_eq!(second.distance_km, 73.2);
    assert_eq!(second.norm_total, 15.23);
    // 16 l consumed against a 15.23 l norm: slightly over.
    assert!(second.over_norm_primary());
    // 14 l consumed: a saving.
    assert!(!second.over_norm_secondary());
}

#[test]
fn test_aggregates_sum_rounded_parts() {
    let report = two_trip_session().summarize();

    // 20.40 + 15.23, never a re-rounding of the raw sum.
    assert_eq!(report.total_norm, 35.63);
    assert_eq!(report.total_consumed_primary, 41.0);
    assert_eq!(report.total_consumed_secondary, 38.8);
    assert_eq!(report.total_difference_primary, 5.37);
    assert_eq!(report.total_difference_secondary, 3.17);
}

#[test]
fn test_carry_over_links_trips() {
    let session = two_trip_session();
    let trips = session.ledger().trips();

    assert_eq!(trips[1].start, trips[0].end);
}

#[test]
fn test_negative_readings_flow_through_summary() {
    // A rolled-back odometer: no validation anywhere, the negative
    // distance simply scales the norm negative too.
    let mut session = default_session();
    session
        .record_trip(
            TripStart::Fresh(snapshot(500.0, 100.0, 100.0)),
            snapshot(400.0, 90.0, 95.0),
            0.0,
        )
        .unwrap();

    let report = session.summarize();
    let figures = &report.trips[0];

    assert_eq!(figures.distance_km, -100.0);
    assert_eq!(figures.consumed_primary, -10.0);
    assert_eq!(figures.norm_total, -20.0);
    // -10 consumed minus a -20 norm: reported as 10 l over.
    assert_eq!(figures.difference_primary, 10.0);
}

#[test]
fn test_empty_session_summary() {
    let report = default_session().summarize();

    assert!(report.trips.is_empty());
    assert_eq!(report.total_norm, 0.0);
    assert_eq!(report.total_consumed_primary, 0.0);
    assert_eq!(report.total_difference_secondary, 0.0);
}
