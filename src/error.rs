use thiserror::Error;

pub type PrinterResult<T> = Result<T, PrinterError>;

#[derive(Debug, Error)]
pub enum PrinterError {
    #[error("invalid selector key `{key}`: {reason}")]
    InvalidSelector { key: String, reason: &'static str },

    #[error("invalid plugin: {0}")]
    InvalidPlugin(String),

    #[error("invalid stats data: {0}")]
    InvalidStats(String),

    #[error("invalid render options: {0}")]
    InvalidOptions(String),
}
