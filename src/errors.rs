use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Thrust curve error: no valid samples")]
    EmptyThrustCurve,

    #[error("Thrust curve error: sample {index} is not a finite number")]
    InvalidThrustSample { index: usize },

    #[error("Thrust curve error: sample {index} is earlier than the previous sample")]
    UnsortedThrustCurve { index: usize },

    #[error("Vehicle error: {0}")]
    InvalidVehicle(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
