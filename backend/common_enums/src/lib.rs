//! Shared enums for the payment gateway integration

pub mod enums;

pub use enums::{Currency, IntentStatus};
