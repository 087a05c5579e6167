use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, Read, Write};

use crate::application::{AppError, Session, TripStart};
use crate::domain::{MeterSnapshot, NormConfig, parse_reading};
use crate::io::{Exporter, read_trips_csv};

/// Tripnorm - Fuel-Consumption Trip Ledger
#[derive(Parser)]
#[command(name = "tripnorm")]
#[command(about = "Records vehicle trips and compares fuel consumption against a cargo-adjusted norm")]
#[command(version)]
pub struct Cli {
    /// Base norm in liters per 100 km with zero cargo
    #[arg(long, global = true, default_value_t = 20.0)]
    pub base_norm: f64,

    /// Additional liters per 100 km per metric ton of cargo
    #[arg(long, global = true, default_value_t = 0.4)]
    pub extra_per_ton: f64,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record trips interactively and report on exit
    Session {
        /// Also write the text report to this file when the session ends
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Summarize trips from a CSV file in one shot
    Compute {
        /// Input CSV file (stdin if omitted)
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: text, csv, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let norm = NormConfig::new(self.base_norm, self.extra_per_ton);

        match self.command {
            Commands::Session { output } => {
                run_session_command(norm, output.as_deref(), self.verbose)
            }
            Commands::Compute {
                input,
                output,
                format,
            } => run_compute_command(norm, input.as_deref(), output.as_deref(), &format, self.verbose),
        }
    }
}

fn run_session_command(norm: NormConfig, output: Option<&str>, verbose: bool) -> Result<()> {
    let mut session = Session::new(norm);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    if verbose {
        eprintln!("[session] {} trip(s) recorded", session.ledger().len());
    }

    // A failed report write is reported, never fatal: the summary has
    // already been shown on screen.
    if let Some(path) = output {
        let written = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path))
            .and_then(|file| Exporter::new(&session).write_text(file));
        match written {
            Ok(()) => println!("Report written to: {}", path),
            Err(e) => eprintln!("Failed to write report: {:#}", e),
        }
    }

    Ok(())
}

fn run_compute_command(
    norm: NormConfig,
    input: Option<&str>,
    output: Option<&str>,
    format: &str,
    verbose: bool,
) -> Result<()> {
    let reader: Box<dyn Read> = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(io::stdin()),
    };

    let imported = read_trips_csv(reader)?;

    if !imported.errors.is_empty() {
        eprintln!("Skipped {} row(s):", imported.errors.len());
        for error in imported.errors.iter().take(10) {
            eprintln!(
                "  Line {}: {}",
                error.line,
                error
                    .field
                    .as_ref()
                    .map(|f| format!("{}: ", f))
                    .unwrap_or_default()
                    + &error.error
            );
        }
        if imported.errors.len() > 10 {
            eprintln!("  ... and {} more errors", imported.errors.len() - 10);
        }
    }

    if verbose {
        eprintln!(
            "[compute] read {} trip(s), {} row error(s)",
            imported.trips.len(),
            imported.errors.len()
        );
    }

    let session = Session::with_trips(norm, imported.trips);
    let exporter = Exporter::new(&session);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    match format {
        "text" => exporter.write_text(writer)?,
        "csv" => {
            let count = exporter.write_trips_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} trip(s)", count);
            }
        }
        "json" => {
            exporter.write_json(writer)?;
        }
        _ => {
            anyhow::bail!("Invalid format '{}'. Valid formats: text, csv, json", format);
        }
    }

    Ok(())
}

/// The interactive menu loop. Generic over the streams so tests can
/// drive it with in-memory buffers; reaching end of input behaves
/// like choosing Quit at the menu.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    loop {
        writeln!(output)?;
        writeln!(output, "Choose an option:")?;
        writeln!(output, "1. Start a separate trip (enter fresh start readings)")?;
        writeln!(
            output,
            "2. Continue the trip (previous end readings become the start)"
        )?;
        writeln!(output, "3. Show results")?;
        writeln!(output, "4. Quit")?;
        output.flush()?;

        let Some(choice) = read_trimmed_line(input)? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let start = MeterSnapshot::new(
                    prompt_reading(input, output, "Odometer reading [km]:")?,
                    prompt_reading(input, output, "Primary fuel counter reading [l]:")?,
                    prompt_reading(input, output, "Secondary fuel counter reading [l]:")?,
                );
                record_trip_interactive(session, TripStart::Fresh(start), input, output)?;
            }

            "2" => match session.resolve_start(TripStart::CarryOver) {
                Ok(_) => record_trip_interactive(session, TripStart::CarryOver, input, output)?,
                Err(AppError::NoCarryOverReadings) => {
                    writeln!(output, "No start readings yet. Choose option 1.")?;
                }
                Err(e) => return Err(e),
            },

            "3" => {
                Exporter::new(session)
                    .write_text(&mut *output)
                    .map_err(io::Error::other)?;
            }

            "4" => break,

            _ => {
                writeln!(output, "Invalid option. Try again.")?;
            }
        }
    }

    Ok(())
}

fn record_trip_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    start: TripStart,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let end = MeterSnapshot::new(
        prompt_reading(input, output, "Odometer reading after the trip [km]:")?,
        prompt_reading(
            input,
            output,
            "Primary fuel counter reading after the trip [l]:",
        )?,
        prompt_reading(
            input,
            output,
            "Secondary fuel counter reading after the trip [l]:",
        )?,
    );
    let cargo_kg = prompt_reading(input, output, "Cargo carried during the trip [kg]:")?;

    session.record_trip(start, end, cargo_kg)?;
    writeln!(output, "Trip {} recorded.", session.ledger().len())?;
    Ok(())
}

/// Ask until the input parses as a number. A comma decimal separator
/// is accepted; anything else re-prompts.
fn prompt_reading<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64, AppError> {
    loop {
        writeln!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = read_trimmed_line(input)? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended in the middle of a trip",
            )
            .into());
        };

        match parse_reading(&line) {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Invalid value. Try again.")?,
        }
    }
}

fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
