use shoes_core::ShoesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("invalid engine input: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Core(#[from] ShoesError),
}

pub type SimResult<T> = Result<T, SimError>;
