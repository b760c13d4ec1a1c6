//! Builds normalized payment intents from checkout-side data sources
//!
//! Each source (gateway API response, cart, order, renewal order, processed
//! payment) has a differently-shaped view of the same payment attempt; the
//! [`IntentBuilder`] maps every one of them onto [`domain_types::Intent`].

pub mod interfaces;
pub mod transformers;

pub use interfaces::{Cart, CheckoutSession, Order, OrderIntentIndex};
pub use transformers::{GatewayIntentResponse, IntentBuilder};
