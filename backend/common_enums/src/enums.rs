use utoipa::ToSchema;

/// The three-letter ISO 4217 currency code for the payment amount. Limited
/// to the currencies the gateway settles in.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    CRC,
    USD,
}

impl Currency {
    pub fn iso_4217(self) -> &'static str {
        match self {
            Self::CRC => "188",
            Self::USD => "840",
        }
    }

    pub fn number_of_digits_after_decimal_point(self) -> u8 {
        match self {
            Self::CRC | Self::USD => 2,
        }
    }
}

/// Lifecycle state the gateway reports for a payment intent.
///
/// The gateway's vocabulary is not validated here: codes outside the known
/// set are carried through as [`IntentStatus::Unknown`].
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Succeeded,
    Canceled,
    #[serde(untagged)]
    #[strum(default)]
    Unknown(String),
}
