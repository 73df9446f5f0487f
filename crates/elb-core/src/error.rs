use crate::convert::{MAX_VALUE, MIN_VALUE};
use crate::numeral::Malformed;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("malformed number {input:?}: {reason}")]
    MalformedNumber {
        input: String,
        #[source]
        reason: Malformed,
    },
    #[error("value {input} is out of bounds, must be between {} and {}", MIN_VALUE, MAX_VALUE)]
    ValueOutOfBounds { input: String },
}

impl ConvertError {
    /// The trimmed input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            ConvertError::MalformedNumber { input, .. } | ConvertError::ValueOutOfBounds { input } => {
                input
            }
        }
    }
}
