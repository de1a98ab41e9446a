use crate::compat::String;

/// Errors reported by an [`Environment`](crate::Environment) when writing history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// No history object is reachable (no window, detached document)
    Unavailable,
    /// The navigation API refused the write
    Rejected(String),
}

impl core::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => f.write_str("History API unavailable"),
            Self::Rejected(reason) => write!(f, "History write rejected: {reason}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HistoryError {}

/// Result type for history writes
pub type Result<T> = core::result::Result<T, HistoryError>;
