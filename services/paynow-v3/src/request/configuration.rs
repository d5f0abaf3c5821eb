use paynow_core::validate::{self, Validate};
use paynow_core::Result;
use serde::{Deserialize, Serialize};

/// Payload of `PATCH configuration/shop/urls`.
///
/// Absent urls are left unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopUrlsRequest {
    /// Default return address after payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_url: Option<String>,
    /// Address payment status notifications are posted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
}

impl Validate for ShopUrlsRequest {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.continue_url {
            validate::http_url("continueUrl", url)?;
        }
        if let Some(url) = &self.notification_url {
            validate::http_url("notificationUrl", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shop_urls() -> anyhow::Result<()> {
        let req = ShopUrlsRequest {
            continue_url: Some("https://shop.example.com/return".to_string()),
            notification_url: Some("https://shop.example.com/paynow/notify".to_string()),
        };
        assert!(req.validate().is_ok());
        assert_eq!(
            serde_json::to_string(&req)?,
            r#"{"continueUrl":"https://shop.example.com/return","notificationUrl":"https://shop.example.com/paynow/notify"}"#
        );

        let req = ShopUrlsRequest {
            continue_url: None,
            notification_url: Some("notify".to_string()),
        };
        let err = req.validate().unwrap_err();
        assert!(err.message().starts_with("notificationUrl"));

        assert!(ShopUrlsRequest::default().validate().is_ok());
        Ok(())
    }
}
