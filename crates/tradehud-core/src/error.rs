use thiserror::Error;

/// Validation errors for user-entered ticker input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },
}

/// User-facing failure categories for a HUD session.
///
/// `Empty` and `InvalidFormat` are detected locally and never reach the
/// gateway; the rest originate from the gateway call. Each code carries a
/// wire-stable reason string and one fixed message shown on the ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Empty,
    InvalidFormat,
    NotFound,
    NetworkError,
    Unknown,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::InvalidFormat => "invalid_format",
            Self::NotFound => "not_found",
            Self::NetworkError => "network_error",
            Self::Unknown => "unknown",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "Enter a ticker symbol (e.g., AAPL).",
            Self::InvalidFormat => {
                "Invalid ticker format. Use letters only (1-5 characters, e.g., AAPL)."
            }
            Self::NotFound => {
                "Ticker not recognized. Please check the spelling or try a different ticker."
            }
            Self::NetworkError => "Network error. Please try again later.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }

    pub const fn from_validation(error: &ValidationError) -> Self {
        match error {
            ValidationError::EmptyTicker => Self::Empty,
            ValidationError::TickerTooLong { .. } | ValidationError::TickerInvalidChar { .. } => {
                Self::InvalidFormat
            }
        }
    }
}
