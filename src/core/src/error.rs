use thiserror::Error;

/// The one fatal error surface the core exposes (spec §7 `InvalidInput`).
/// Everything else — clamped tactics, empty rosters — is handled in place
/// and never reaches the caller as an `Err`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
