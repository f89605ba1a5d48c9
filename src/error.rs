//! Engine error type

use std::fmt;

/// Errors raised by the simulation core
///
/// Malformed level text is never an error: unknown symbols degrade to
/// empty cells. Only contract violations and unreadable level packs fail.
#[derive(Debug)]
pub enum EngineError {
    /// A geometric argument violated its contract (non-finite vector,
    /// negative size, legend entry shadowing an obstacle symbol)
    InvalidArgument(String),
    /// A level pack could not be decoded
    LevelPack(serde_json::Error),
}

impl EngineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidArgument(msg.into())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            EngineError::LevelPack(e) => write!(f, "level pack error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidArgument(_) => None,
            EngineError::LevelPack(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::LevelPack(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_argument() {
        let err = EngineError::invalid("size must be non-negative");
        assert_eq!(err.to_string(), "invalid argument: size must be non-negative");
    }

    #[test]
    fn test_level_pack_error_has_source() {
        use std::error::Error;

        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = EngineError::from(json_err);
        assert!(matches!(err, EngineError::LevelPack(_)));
        assert!(err.source().is_some());
    }
}
