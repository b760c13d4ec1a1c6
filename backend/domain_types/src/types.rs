//! Canonical payment intent representation

use common_enums::{Currency, IntentStatus};
use common_utils::{id_type::CustomerId, types::MinorUnit};

/// Normalized payment intent: the single shape the rest of the payment flow
/// creates and updates against the gateway, whatever source it was derived
/// from.
///
/// Serializes to the gateway's camelCase wire shape with unset fields
/// omitted, so a partially-filled intent doubles as a patch payload.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Gateway-assigned identifier. Absent until the gateway has created
    /// the intent.
    pub id: Option<String>,
    /// Amount in minor units, never a floating decimal
    pub amount: MinorUnit,
    pub currency: Option<Currency>,
    pub customer_id: Option<CustomerId>,
    pub payment_method_id: Option<String>,
    pub status: Option<IntentStatus>,
    pub description: Option<String>,
    /// Charge records attached by the gateway, carried through unmodified
    pub charges: Option<Vec<serde_json::Value>>,
}
