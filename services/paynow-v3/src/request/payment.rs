use crate::constants::{CURRENCIES, MAX_AMOUNT_DIGITS, MAX_VALIDITY_TIME, MIN_VALIDITY_TIME};
use crate::request::BuyerInfo;
use once_cell::sync::Lazy;
use paynow_core::validate::{self, Validate};
use paynow_core::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BLIK_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").expect("valid regex"));

/// Payload of `POST payments`.
///
/// Amounts are in the currency's minor unit, `10000` is 100.00 PLN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub amount: i64,
    /// Defaults to PLN on the server side when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Order id in the merchant's system.
    pub external_id: String,
    pub description: String,
    /// Where the buyer returns after paying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_url: Option<String>,
    pub buyer: BuyerInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_items: Vec<OrderItem>,
    /// Seconds the payment stays payable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_time: Option<i64>,
    /// Skip the method picker and go straight to this payment method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<i64>,
    /// BLIK code for white label BLIK payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
}

impl CreatePaymentRequest {
    /// Create a payment request with the required fields set.
    pub fn new(external_id: &str, amount: i64, description: &str, buyer: BuyerInfo) -> Self {
        Self {
            amount,
            external_id: external_id.to_string(),
            description: description.to_string(),
            buyer,
            ..Default::default()
        }
    }
}

impl Validate for CreatePaymentRequest {
    fn validate(&self) -> Result<()> {
        validate::positive_digits("amount", self.amount, MAX_AMOUNT_DIGITS)?;
        if let Some(currency) = &self.currency {
            validate::one_of("currency", currency, CURRENCIES)?;
        }
        validate::required("externalId", &self.external_id)?;
        validate::max_length("externalId", &self.external_id, 100)?;
        validate::required("description", &self.description)?;
        validate::max_length("description", &self.description, 255)?;
        if let Some(url) = &self.continue_url {
            validate::http_url("continueUrl", url)?;
        }
        if let Some(v) = self.validity_time {
            validate::in_range("validityTime", v, MIN_VALIDITY_TIME, MAX_VALIDITY_TIME)?;
        }
        if let Some(v) = self.payment_method_id {
            validate::in_range("paymentMethodId", v, 1, i64::MAX)?;
        }
        if let Some(code) = &self.authorization_code {
            validate::matches("authorizationCode", code, &BLIK_CODE, "6 digits")?;
        }

        validate::nested("buyer", &self.buyer)?;
        validate::each("orderItems", &self.order_items)
    }
}

/// One line of the order behind a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    pub category: String,
    pub quantity: i64,
    /// Unit price in the minor unit.
    pub price: i64,
}

impl Validate for OrderItem {
    fn validate(&self) -> Result<()> {
        validate::required("name", &self.name)?;
        validate::max_length("name", &self.name, 120)?;
        if let Some(v) = &self.producer {
            validate::max_length("producer", v, 120)?;
        }
        validate::required("category", &self.category)?;
        validate::max_length("category", &self.category, 120)?;
        validate::positive_digits("quantity", self.quantity, MAX_AMOUNT_DIGITS)?;
        validate::positive_digits("price", self.price, MAX_AMOUNT_DIGITS)
    }
}
