use anyhow::Result;
use std::io::Write;

use crate::application::{Session, SummaryReport};
use crate::domain::format_liters;

/// Exporter for writing a session's summary in the supported formats.
/// Every export is one-way: nothing written here is ever read back,
/// except that the CSV trip rows are accepted by the importer.
pub struct Exporter<'a> {
    session: &'a Session,
}

impl<'a> Exporter<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Write the prose text report: one section per trip in insertion
    /// order, then the overall aggregate section.
    pub fn write_text<W: Write>(&self, mut writer: W) -> Result<()> {
        let report = self.session.summarize();

        writeln!(writer, "Trip summary")?;
        writeln!(
            writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            writer,
            "Norm: {} l/100km + {} l/100km per ton of cargo",
            format_liters(report.base_per_100),
            format_liters(report.extra_per_ton)
        )?;

        for figures in &report.trips {
            writeln!(writer)?;
            writeln!(writer, "Trip {}:", figures.index)?;
            writeln!(
                writer,
                "Distance travelled: {} km",
                format_liters(figures.distance_km)
            )?;
            writeln!(
                writer,
                "Fuel consumed (primary system): {} l",
                format_liters(figures.consumed_primary)
            )?;
            writeln!(
                writer,
                "Fuel consumed (secondary system): {} l",
                format_liters(figures.consumed_secondary)
            )?;
            writeln!(
                writer,
                "Fuel norm for the trip: {} l",
                format_liters(figures.norm_total)
            )?;
            write_difference_line(&mut writer, "Primary system", figures.difference_primary, false)?;
            write_difference_line(
                &mut writer,
                "Secondary system",
                figures.difference_secondary,
                false,
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "--- Overall summary ---")?;
        writeln!(
            writer,
            "Total fuel norm: {} l",
            format_liters(report.total_norm)
        )?;
        writeln!(
            writer,
            "Total fuel consumed (primary system): {} l",
            format_liters(report.total_consumed_primary)
        )?;
        writeln!(
            writer,
            "Total fuel consumed (secondary system): {} l",
            format_liters(report.total_consumed_secondary)
        )?;
        write_difference_line(
            &mut writer,
            "Primary system",
            report.total_difference_primary,
            true,
        )?;
        write_difference_line(
            &mut writer,
            "Secondary system",
            report.total_difference_secondary,
            true,
        )?;
        writer.flush()?;

        Ok(())
    }

    /// Export trips as CSV: the raw readings followed by the rounded
    /// computed figures. Returns the number of rows written.
    pub fn write_trips_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let report = self.session.summarize();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "start_odometer_km",
            "end_odometer_km",
            "start_primary_l",
            "end_primary_l",
            "start_secondary_l",
            "end_secondary_l",
            "cargo_kg",
            "distance_km",
            "consumed_primary_l",
            "consumed_secondary_l",
            "norm_total_l",
            "difference_primary_l",
            "difference_secondary_l",
        ])?;

        let mut count = 0;
        for (trip, figures) in self.session.ledger().trips().iter().zip(&report.trips) {
            csv_writer.write_record([
                trip.start.odometer_km.to_string(),
                trip.end.odometer_km.to_string(),
                trip.start.primary_liters.to_string(),
                trip.end.primary_liters.to_string(),
                trip.start.secondary_liters.to_string(),
                trip.end.secondary_liters.to_string(),
                trip.cargo_kg.to_string(),
                figures.distance_km.to_string(),
                figures.consumed_primary.to_string(),
                figures.consumed_secondary.to_string(),
                figures.norm_total.to_string(),
                figures.difference_primary.to_string(),
                figures.difference_secondary.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the summary report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<SummaryReport> {
        let report = self.session.summarize();
        let json = serde_json::to_string_pretty(&report)?;
        writer.write_all(json.as_bytes())?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(report)
    }
}

/// Over-consumption reads "consumed N l more than the norm" in a trip
/// section and "exceeded the norm by N l" in the aggregate section;
/// savings read the same in both.
fn write_difference_line<W: Write>(
    writer: &mut W,
    label: &str,
    difference: f64,
    aggregate: bool,
) -> Result<()> {
    if difference > 0.0 {
        if aggregate {
            writeln!(
                writer,
                "{}: exceeded the norm by {} l",
                label,
                format_liters(difference)
            )?;
        } else {
            writeln!(
                writer,
                "{}: consumed {} l more than the norm",
                label,
                format_liters(difference)
            )?;
        }
    } else {
        writeln!(
            writer,
            "{}: saved {} l of fuel",
            label,
            format_liters(difference.abs())
        )?;
    }
    Ok(())
}
