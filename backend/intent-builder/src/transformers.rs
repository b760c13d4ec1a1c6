//! Maps gateway responses and checkout state into normalized intents

use common_enums::{Currency, IntentStatus};
use common_utils::{
    errors::CustomResult,
    id_type::CustomerId,
    masking::{PeekInterface, Secret},
    types::{FloatMajorUnit, MinorUnit},
};
use domain_types::{errors::IntentError, Intent};
use error_stack::ResultExt;
use serde::Deserialize;

use crate::interfaces::{Cart, CheckoutSession, Order, OrderIntentIndex};

/// Intent object as returned by the gateway API.
///
/// Error responses reuse the same shape: `id` is absent and `message` /
/// `path` describe the failed request. The customer and payment method may
/// arrive flat (`customerId`) or expanded (`customer.id`).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayIntentResponse {
    pub id: Option<String>,
    pub message: Option<serde_json::Value>,
    pub path: Option<String>,
    pub charges: Option<Vec<serde_json::Value>>,
    pub currency: Option<String>,
    pub customer_id: Option<String>,
    pub customer: Option<GatewayCustomer>,
    pub payment_method_id: Option<String>,
    pub payment_method: Option<GatewayPaymentMethod>,
    /// Already in minor units on the wire
    #[serde(default)]
    pub amount: MinorUnit,
    pub status: Option<IntentStatus>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GatewayCustomer {
    pub id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GatewayPaymentMethod {
    pub id: String,
}

impl GatewayIntentResponse {
    /// The flat `customerId` field wins over the expanded `customer.id`.
    fn customer_id(&self) -> Option<&str> {
        self.customer_id
            .as_deref()
            .or_else(|| self.customer.as_ref().map(|customer| customer.id.as_str()))
    }

    fn payment_method_id(&self) -> Option<&str> {
        self.payment_method_id
            .as_deref()
            .or_else(|| {
                self.payment_method
                    .as_ref()
                    .map(|payment_method| payment_method.id.as_str())
            })
    }

    /// Error message for a response rejected over its id: the gateway's own
    /// message when it sent one (structured messages become JSON text),
    /// otherwise a description of the bad id.
    fn error_message(&self) -> String {
        match &self.message {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(message) => message.to_string(),
            None => format!(
                "Invalid intent id: {}",
                self.id.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl TryFrom<GatewayIntentResponse> for Intent {
    type Error = error_stack::Report<IntentError>;

    fn try_from(response: GatewayIntentResponse) -> Result<Self, Self::Error> {
        let id = match response.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                tracing::error!(
                    intent_id = ?response.id,
                    message = ?response.message,
                    path = ?response.path,
                    "gateway returned an intent without a usable id"
                );
                return Err(IntentError::InvalidIntentId {
                    message: response.error_message(),
                }
                .into());
            }
        };

        let currency = response
            .currency
            .as_deref()
            .and_then(|code| code.parse::<Currency>().ok());
        let customer_id = response
            .customer_id()
            .and_then(|customer_id| CustomerId::new(customer_id).ok());
        let payment_method_id = response.payment_method_id().map(str::to_string);

        Ok(Self {
            id: Some(id),
            amount: response.amount,
            currency,
            customer_id,
            payment_method_id,
            status: response.status,
            description: None,
            charges: response.charges,
        })
    }
}

/// Builds [`Intent`] values from the various checkout-side sources.
///
/// The two lookup collaborators are injected so the builder itself stays
/// stateless; operations that need neither are associated functions.
#[derive(Clone, Copy)]
pub struct IntentBuilder<'a> {
    session: &'a dyn CheckoutSession,
    order_index: &'a dyn OrderIntentIndex,
}

impl<'a> IntentBuilder<'a> {
    pub fn new(
        session: &'a dyn CheckoutSession,
        order_index: &'a dyn OrderIntentIndex,
    ) -> Self {
        Self {
            session,
            order_index,
        }
    }

    /// Normalizes a gateway API response.
    ///
    /// Fails when the response carries no usable id; the upstream message
    /// and request path are logged before the failure surfaces so the
    /// rejection can be correlated with the gateway's reason.
    pub fn from_gateway_response(
        response: GatewayIntentResponse,
    ) -> CustomResult<Intent, IntentError> {
        Intent::try_from(response)
    }

    /// Builds the intent for the current cart. Picks up the intent already
    /// started in this checkout session, if any, instead of describing a
    /// fresh one.
    pub fn from_cart(
        &self,
        cart: &dyn Cart,
        currency_code: &str,
        customer_id: Option<CustomerId>,
    ) -> CustomResult<Intent, IntentError> {
        let amount = cart
            .total_excluding_tax()
            .to_minor_unit_as_i64()
            .change_context(IntentError::AmountConversionFailed)?;

        let mut intent = Intent {
            amount,
            description: Some("Intent for cart".to_string()),
            currency: currency_code.parse::<Currency>().ok(),
            customer_id,
            ..Intent::default()
        };

        if let Some(pending_intent_id) = self.session.pending_intent_id() {
            intent.id = Some(pending_intent_id);
        }

        Ok(intent)
    }

    /// Builds the intent for an order. Picks up the intent already
    /// associated with the order, if any.
    pub fn from_order(
        &self,
        order: &dyn Order,
        customer_id: CustomerId,
    ) -> CustomResult<Intent, IntentError> {
        let amount = order
            .total_excluding_tax()
            .to_minor_unit_as_i64()
            .change_context(IntentError::AmountConversionFailed)?;

        let mut intent = Intent {
            amount,
            customer_id: Some(customer_id),
            description: Some(format!("Order ID: {}", order.id())),
            currency: order.currency().parse::<Currency>().ok(),
            ..Intent::default()
        };

        if let Some(intent_id) = self.order_index.intent_id_for_order(order.id()) {
            intent.id = Some(intent_id);
        }

        Ok(intent)
    }

    /// Same as [`Self::from_order`] apart from the description.
    pub fn from_renewal(
        &self,
        order: &dyn Order,
        customer_id: CustomerId,
    ) -> CustomResult<Intent, IntentError> {
        let mut intent = self.from_order(order, customer_id)?;
        intent.description = Some(format!("Renewal Order ID: {}", order.id()));
        Ok(intent)
    }

    /// Builds the update for an order whose payment already went through.
    /// The given intent id is trusted as-is.
    pub fn from_processed_payment(
        intent_id: String,
        order_id: &str,
        merchant_key: &Secret<String>,
        cart_total: FloatMajorUnit,
    ) -> CustomResult<Intent, IntentError> {
        let amount = cart_total
            .to_minor_unit_as_i64()
            .change_context(IntentError::AmountConversionFailed)?;

        Ok(Intent {
            id: Some(intent_id),
            amount,
            description: Some(format!("{} - Order ID: {}", merchant_key.peek(), order_id)),
            ..Intent::default()
        })
    }
}
