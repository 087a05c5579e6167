pub mod export;
pub mod import;

pub use export::Exporter;
pub use import::{ImportError, ImportResult, read_trips_csv};
