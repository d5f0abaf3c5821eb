use crate::constants::{MAX_AMOUNT_DIGITS, PAYMENT_METHOD_TYPES};
use crate::sign_request::Parameters;
use paynow_core::validate::{self, Validate};
use paynow_core::{Error, Result};

/// Query of `GET payments/paymentmethods`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPaymentMethodsRequest {
    /// Only return methods available for this amount.
    pub amount: Option<i64>,
    /// Only return methods of this type, like `BLIK` or `CARD`.
    pub payment_method_type: Option<String>,
}

impl GetPaymentMethodsRequest {
    /// Convert into query parameters.
    pub fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        if let Some(amount) = self.amount {
            params.insert("amount", amount.to_string());
        }
        if let Some(t) = &self.payment_method_type {
            params.insert("type", t);
        }
        params
    }
}

impl Validate for GetPaymentMethodsRequest {
    fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            validate::positive_digits("amount", amount, MAX_AMOUNT_DIGITS)?;
        }
        if let Some(t) = &self.payment_method_type {
            validate::one_of("type", t, PAYMENT_METHOD_TYPES)?;
        }
        Ok(())
    }
}

/// Query of `GET payments/dataprocessing/notices`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDataProcessingNoticesRequest {
    /// BCP 47 language tag of the notices, like `pl-PL`.
    pub locale: Option<String>,
}

impl GetDataProcessingNoticesRequest {
    /// Convert into query parameters.
    pub fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        if let Some(locale) = &self.locale {
            params.insert("locale", locale);
        }
        params
    }
}

impl Validate for GetDataProcessingNoticesRequest {
    fn validate(&self) -> Result<()> {
        if let Some(locale) = &self.locale {
            validate::max_length("locale", locale, 35)?;
            if locale.trim().chars().count() < 2 {
                return Err(Error::request_invalid(
                    "locale must be at least 2 characters",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payment_methods_parameters() {
        let req = GetPaymentMethodsRequest {
            amount: Some(10000),
            payment_method_type: Some("BLIK".to_string()),
        };
        assert!(req.validate().is_ok());

        let params = req.to_parameters();
        assert_eq!(params.get("amount"), Some(&["10000".to_string()][..]));
        assert_eq!(params.get("type"), Some(&["BLIK".to_string()][..]));
        assert!(GetPaymentMethodsRequest::default().to_parameters().is_empty());
    }

    #[test]
    fn test_payment_methods_validation() {
        let req = GetPaymentMethodsRequest {
            amount: Some(-1),
            payment_method_type: None,
        };
        assert!(req.validate().is_err());

        let req = GetPaymentMethodsRequest {
            amount: None,
            payment_method_type: Some("CASH".to_string()),
        };
        assert!(req.validate().unwrap_err().message().starts_with("type"));
    }

    #[test]
    fn test_data_processing_notices() {
        let req = GetDataProcessingNoticesRequest {
            locale: Some("pl-PL".to_string()),
        };
        assert!(req.validate().is_ok());
        assert_eq!(
            req.to_parameters().to_query_string().as_deref(),
            Some("locale=pl-PL")
        );

        let req = GetDataProcessingNoticesRequest {
            locale: Some("p".to_string()),
        };
        assert!(req.validate().is_err());
        assert!(GetDataProcessingNoticesRequest::default().validate().is_ok());
    }
}
