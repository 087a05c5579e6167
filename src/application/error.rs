use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No previous trip to continue from; start a trip with fresh readings first")]
    NoCarryOverReadings,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
