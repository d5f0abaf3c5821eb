use crate::constants::{MAX_AMOUNT_DIGITS, REFUND_REASONS};
use paynow_core::validate::{self, Validate};
use paynow_core::Result;
use serde::{Deserialize, Serialize};

/// Payload of `POST payments/{paymentId}/refunds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundRequest {
    pub amount: i64,
    /// One of `RMA`, `REFUND_BEFORE_14`, `REFUND_AFTER_14` or `OTHER`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CreateRefundRequest {
    /// Refund `amount` with the given reason.
    pub fn new(amount: i64, reason: &str) -> Self {
        Self {
            amount,
            reason: Some(reason.to_string()),
        }
    }
}

impl Validate for CreateRefundRequest {
    fn validate(&self) -> Result<()> {
        validate::positive_digits("amount", self.amount, MAX_AMOUNT_DIGITS)?;
        if let Some(reason) = &self.reason {
            validate::one_of("reason", reason, REFUND_REASONS)?;
        }
        Ok(())
    }
}
