//! Error taxonomy for intent construction

/// Failures while building a normalized payment intent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    /// The gateway response did not carry a usable intent id. The message is
    /// the gateway's own error message when it sent one.
    #[error("{message}")]
    InvalidIntentId { message: String },
    /// A checkout total could not be converted to minor units
    #[error("failed to convert amount to minor units")]
    AmountConversionFailed,
}
