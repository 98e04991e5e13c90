use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error(transparent)]
    InvalidInput(#[from] core_types::CoreError),

    #[error("Required calculation strategy '{0}' was not supplied")]
    MissingStrategy(&'static str),

    #[error("Calculation strategy failed: {0}")]
    Strategy(#[from] strategies::StrategyError),

    #[error("Error in calculation: {0}")]
    Calculation(String),
}
