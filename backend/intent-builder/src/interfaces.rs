//! Read-only collaborator interfaces the builder is handed at call time

use common_utils::types::FloatMajorUnit;

/// View of an in-progress shopping cart
pub trait Cart {
    /// Cart total excluding tax, in major units
    fn total_excluding_tax(&self) -> FloatMajorUnit;
}

/// View of a placed order
pub trait Order {
    fn id(&self) -> i64;

    /// Order total excluding tax, in major units
    fn total_excluding_tax(&self) -> FloatMajorUnit;

    /// Raw currency code as stored on the order. Not guaranteed to be a
    /// supported currency.
    fn currency(&self) -> String;
}

/// Session-scoped lookup for an intent started earlier in this checkout
pub trait CheckoutSession {
    fn pending_intent_id(&self) -> Option<String>;
}

/// Lookup of the intent already associated with an order
pub trait OrderIntentIndex {
    fn intent_id_for_order(&self, order_id: i64) -> Option<String>;
}
