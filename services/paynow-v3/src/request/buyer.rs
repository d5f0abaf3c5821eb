use once_cell::sync::Lazy;
use paynow_core::validate::{self, Validate};
use paynow_core::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ZIPCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-\d{3}$").expect("valid regex"));
static PHONE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,3}$").expect("valid regex"));

/// Buyer of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerInfo {
    /// Buyer email, required.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<BuyerAddress>,
    /// BCP 47 language tag used on the payment page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Buyer id in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl BuyerInfo {
    /// Create a buyer identified only by email.
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Default::default()
        }
    }
}

impl Validate for BuyerInfo {
    fn validate(&self) -> Result<()> {
        validate::required("email", &self.email)?;
        if let Some(v) = &self.first_name {
            validate::max_length("firstName", v, 50)?;
        }
        if let Some(v) = &self.last_name {
            validate::max_length("lastName", v, 50)?;
        }
        if let Some(v) = &self.locale {
            validate::max_length("locale", v, 35)?;
        }
        if let Some(v) = &self.external_id {
            validate::max_length("externalId", v, 100)?;
        }

        // Sub-records are checked exactly when present.
        if let Some(phone) = &self.phone {
            validate::nested("phone", phone)?;
        }
        if let Some(address) = &self.address {
            validate::nested("address", address)?;
        }
        Ok(())
    }
}

/// Buyer phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// Country calling code, like `+48`.
    pub prefix: String,
    pub number: i64,
}

impl Validate for Phone {
    fn validate(&self) -> Result<()> {
        validate::matches("prefix", &self.prefix, &PHONE_PREFIX, "+ followed by 1 to 3 digits")?;
        validate::positive_digits("number", self.number, 10)
    }
}

/// Billing and shipping addresses of a buyer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<AddressType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<AddressType>,
}

impl Validate for BuyerAddress {
    fn validate(&self) -> Result<()> {
        if let Some(billing) = &self.billing {
            validate::nested("billing", billing)?;
        }
        if let Some(shipping) = &self.shipping {
            validate::nested("shipping", shipping)?;
        }
        Ok(())
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_number: Option<String>,
    /// Postal code in `NN-NNN` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Validate for AddressType {
    fn validate(&self) -> Result<()> {
        if let Some(v) = &self.street {
            validate::max_length("street", v, 100)?;
        }
        if let Some(v) = &self.house_number {
            validate::max_length("houseNumber", v, 15)?;
        }
        if let Some(v) = &self.apartment_number {
            validate::max_length("apartmentNumber", v, 15)?;
        }
        if let Some(v) = &self.zipcode {
            validate::max_length("zipcode", v, 15)?;
            validate::matches("zipcode", v, &ZIPCODE, "NN-NNN")?;
        }
        if let Some(v) = &self.city {
            validate::max_length("city", v, 100)?;
        }
        if let Some(v) = &self.county {
            validate::max_length("county", v, 100)?;
        }
        if let Some(v) = &self.country {
            validate::exact_length("country", v, 2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paynow_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn address() -> AddressType {
        AddressType {
            street: Some("Marszałkowska".to_string()),
            house_number: Some("142".to_string()),
            apartment_number: Some("10B".to_string()),
            zipcode: Some("00-123".to_string()),
            city: Some("Warszawa".to_string()),
            county: None,
            country: Some("PL".to_string()),
        }
    }

    #[test_case("00-123", true ; "valid")]
    #[test_case("00123", false ; "missing hyphen")]
    #[test_case("0-0123", false ; "hyphen misplaced")]
    #[test_case("00-1234", false ; "too many digits")]
    #[test_case("AB-CDE", false ; "letters")]
    fn test_zipcode_format(zipcode: &str, ok: bool) {
        let addr = AddressType {
            zipcode: Some(zipcode.to_string()),
            ..address()
        };
        assert_eq!(addr.validate().is_ok(), ok);
    }

    #[test]
    fn test_address_length_bounds() {
        assert!(address().validate().is_ok());

        let addr = AddressType {
            house_number: Some("1".repeat(16)),
            ..address()
        };
        let err = addr.validate().unwrap_err();
        assert_eq!(err.message(), "houseNumber must be at most 15 characters, got 16");

        let addr = AddressType {
            street: Some("s".repeat(101)),
            ..address()
        };
        assert!(addr.validate().is_err());

        let addr = AddressType {
            country: Some("POL".to_string()),
            ..address()
        };
        assert!(addr.validate().is_err());

        assert!(AddressType::default().validate().is_ok());
    }

    #[test]
    fn test_buyer_requires_email() {
        let err = BuyerInfo::default().validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert_eq!(err.message(), "email is required");
        assert!(BuyerInfo::new("jan.kowalski@example.com").validate().is_ok());
    }

    #[test]
    fn test_buyer_validates_present_phone() {
        let buyer = BuyerInfo {
            phone: Some(Phone {
                prefix: "+48".to_string(),
                number: -501_000_000,
            }),
            ..BuyerInfo::new("jan.kowalski@example.com")
        };

        let err = nested_buyer(&buyer);
        assert_eq!(
            err,
            "buyer validation failed: phone validation failed: number must be a positive integer of at most 10 digits"
        );
    }

    #[test]
    fn test_buyer_validates_present_address() {
        let buyer = BuyerInfo {
            address: Some(BuyerAddress {
                billing: Some(address()),
                shipping: Some(AddressType {
                    zipcode: Some("00123".to_string()),
                    ..address()
                }),
            }),
            ..BuyerInfo::new("jan.kowalski@example.com")
        };

        let err = nested_buyer(&buyer);
        assert_eq!(
            err,
            "buyer validation failed: address validation failed: shipping validation failed: zipcode must match NN-NNN, got \"00123\""
        );
    }

    #[test]
    fn test_buyer_without_sub_records_is_valid() {
        let buyer = BuyerInfo {
            first_name: Some("Jan".to_string()),
            last_name: Some("Kowalski".to_string()),
            locale: Some("pl-PL".to_string()),
            ..BuyerInfo::new("jan.kowalski@example.com")
        };
        assert!(buyer.validate().is_ok());
    }

    #[test_case("+48", true ; "poland")]
    #[test_case("+420", true ; "czechia")]
    #[test_case("48", false ; "missing plus")]
    #[test_case("+4800", false ; "too long")]
    fn test_phone_prefix(prefix: &str, ok: bool) {
        let phone = Phone {
            prefix: prefix.to_string(),
            number: 501_000_000,
        };
        assert_eq!(phone.validate().is_ok(), ok);
    }

    fn nested_buyer(buyer: &BuyerInfo) -> String {
        validate::nested("buyer", buyer)
            .unwrap_err()
            .message()
            .to_string()
    }
}
