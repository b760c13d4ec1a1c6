//! Errors and result aliases shared across the workspace

/// Result type carrying an [`error_stack::Report`] on the failure side
pub type CustomResult<T, E> = Result<T, error_stack::Report<E>>;

/// Failures while converting between amount representations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParsingError {
    /// The float amount is not representable as a decimal
    #[error("failed to convert float amount to a decimal")]
    FloatToDecimalConversionFailure,
    /// The decimal amount does not fit in an i64 minor-unit count
    #[error("failed to convert decimal amount to an i64 minor unit")]
    DecimalToI64ConversionFailure,
}
