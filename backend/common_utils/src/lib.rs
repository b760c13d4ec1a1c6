//! Common utilities for the payment gateway integration

pub mod errors;
pub mod id_type;
pub mod masking;
pub mod types;

// Re-export commonly used items
pub use errors::{CustomResult, ParsingError};
pub use id_type::CustomerId;
pub use masking::{ExposeInterface, PeekInterface, Secret};
pub use types::{FloatMajorUnit, MinorUnit};
