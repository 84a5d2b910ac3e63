use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("division by zero: {0}")]
    DivisionByZero(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
