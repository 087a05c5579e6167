use anyhow::Result;
use std::io::Read;

use crate::domain::{MeterSnapshot, Trip, parse_reading};

/// Result of reading a trips CSV: the trips that parsed, in file
/// order, plus the errors for the rows that did not.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub trips: Vec<Trip>,
    pub errors: Vec<ImportError>,
}

/// Error for a single CSV row; the import continues past it.
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

const FIELDS: [&str; 7] = [
    "start_odometer_km",
    "end_odometer_km",
    "start_primary_l",
    "end_primary_l",
    "start_secondary_l",
    "end_secondary_l",
    "cargo_kg",
];

/// Read trips from CSV. The first seven columns must be the raw
/// readings in the order the exporter writes them; extra columns
/// (computed figures from a previous export) are ignored, so an
/// exported trips file can be fed straight back in.
pub fn read_trips_csv<R: Read>(reader: R) -> Result<ImportResult> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut trips = Vec::new();
    let mut errors = Vec::new();

    for (line_num, result) in csv_reader.records().enumerate() {
        let line = line_num + 2; // +2 for header and 0-indexing

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: None,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        let mut values = [0.0_f64; FIELDS.len()];
        let mut row_error = None;
        for (idx, name) in FIELDS.iter().enumerate() {
            match parse_reading(record.get(idx).unwrap_or("")) {
                Ok(value) => values[idx] = value,
                Err(e) => {
                    row_error = Some(ImportError {
                        line,
                        field: Some(name.to_string()),
                        error: e.to_string(),
                    });
                    break;
                }
            }
        }

        if let Some(error) = row_error {
            errors.push(error);
            continue;
        }

        let [start_km, end_km, start_primary, end_primary, start_secondary, end_secondary, cargo_kg] =
            values;
        trips.push(Trip::new(
            MeterSnapshot::new(start_km, start_primary, start_secondary),
            MeterSnapshot::new(end_km, end_primary, end_secondary),
            cargo_kg,
        ));
    }

    Ok(ImportResult { trips, errors })
}
