use thiserror::Error;

/// Errors raised while decoding the `{index:value,...}` text encoding.
///
/// Every variant carries the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing ':' separator in token: {0}")]
    MissingSeparator(String),

    #[error("Index is not a valid integer in token: {0}")]
    InvalidIndex(String),

    #[error("Value can't be parsed in token: {0}")]
    InvalidValue(String),
}
