//! Response shapes.
//!
//! Status fields stay strings so values added by the server later still
//! decode.

use paynow_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of `POST payments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    /// Payment page the buyer should be sent to, absent for white label flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    pub payment_id: String,
    /// `NEW`, `PENDING` or `ERROR`.
    pub status: String,
}

/// Response of `GET payments/{paymentId}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentStatusResponse {
    pub payment_id: String,
    /// `NEW`, `PENDING`, `ERROR`, `CONFIRMED`, `REJECTED`, `EXPIRED`, `ABANDONED` ...
    pub status: String,
}

/// Response of `POST payments/{paymentId}/refunds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundResponse {
    pub refund_id: String,
    pub status: String,
}

/// Response of `GET refunds/{refundId}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRefundStatusResponse {
    pub refund_id: String,
    /// `NEW`, `PENDING`, `SUCCESSFUL`, `FAILED` or `CANCELLED`.
    pub status: String,
    /// `CARD_BALANCE_ERROR`, `BUYER_ACCOUNT_CLOSED` or `OTHER`, only for failed refunds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// One group of `GET payments/paymentmethods`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentMethodsResponse {
    /// `APPLE_PAY`, `BLIK`, `CARD`, `ECOMMERCE`, `GOOGLE_PAY`, `PAYPO` or `PBL`.
    #[serde(rename = "type")]
    pub payment_method_type: String,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

/// A single payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Logo url.
    #[serde(default)]
    pub image: String,
    /// `ENABLED` or `DISABLED`.
    pub status: String,
    /// `REDIRECT` or `CODE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_type: Option<String>,
}

/// One item of `GET payments/dataprocessing/notices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProcessingNotice {
    pub title: String,
    pub content: String,
    pub locale: String,
}

/// Payment status callback posted to the shop's notification url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub status: String,
    /// ISO 8601 timestamp of the status change.
    pub modified_at: String,
}

/// A single error reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.status_code)?;
        for (idx, err) in self.errors.iter().enumerate() {
            f.write_str(if idx == 0 { ": " } else { "; " })?;
            write!(f, "{} {}", err.error_type, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

impl ErrorResponse {
    /// Get the decoded error body a remote error was built from.
    ///
    /// Returns `None` for any other error, including remote errors whose
    /// body could not be decoded.
    pub fn from_error(err: &Error) -> Option<&ErrorResponse> {
        err.source_as::<ErrorResponse>()
    }
}
