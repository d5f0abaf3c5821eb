use crate::response::Notification;
use crate::Credential;
use log::debug;
use paynow_core::hash::verify_base64_hmac_sha256;
use paynow_core::{Error, Result};

/// Check the `Signature` header of a notification callback.
///
/// The signature is the base64 HMAC-SHA256 of the raw body, keyed by the
/// signature key. Comparison runs in constant time.
pub fn verify_notification(signature_key: &str, body: &[u8], signature: &str) -> bool {
    verify_base64_hmac_sha256(signature_key.as_bytes(), body, signature)
}

/// Verify and decode a notification callback.
pub fn parse_notification(cred: &Credential, body: &[u8], signature: &str) -> Result<Notification> {
    if !verify_notification(&cred.signature_key, body, signature) {
        return Err(Error::request_invalid(
            "notification signature does not match its body",
        ));
    }

    let notification: Notification = serde_json::from_slice(body)
        .map_err(|e| Error::request_invalid("failed to decode notification").with_source(e))?;
    debug!(
        "verified notification for payment {}: {}",
        notification.payment_id, notification.status
    );
    Ok(notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paynow_core::hash::base64_hmac_sha256;
    use paynow_core::ErrorKind;

    const BODY: &[u8] =
        br#"{"paymentId":"NOLV-8F9-08K-WGD","externalId":"order123","status":"CONFIRMED","modifiedAt":"2024-05-01T10:11:12"}"#;

    fn cred() -> Credential {
        Credential::new("api-key", "signature-key").unwrap()
    }

    #[test]
    fn test_parse_signed_notification() -> Result<()> {
        let signature = base64_hmac_sha256(b"signature-key", BODY);

        let n = parse_notification(&cred(), BODY, &signature)?;
        assert_eq!(n.status, "CONFIRMED");
        assert_eq!(n.external_id.as_deref(), Some("order123"));
        Ok(())
    }

    #[test]
    fn test_reject_tampered_notification() {
        let signature = base64_hmac_sha256(b"signature-key", BODY);
        let tampered = String::from_utf8_lossy(BODY).replace("CONFIRMED", "REJECTED");

        let err = parse_notification(&cred(), tampered.as_bytes(), &signature).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(!verify_notification("other-key", BODY, &signature));
    }

    #[test]
    fn test_reject_signed_garbage() {
        let body = b"not json";
        let signature = base64_hmac_sha256(b"signature-key", body);

        let err = parse_notification(&cred(), body, &signature).unwrap_err();
        assert_eq!(err.to_string(), "failed to decode notification");
    }
}
