// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Local payload validation.
//!
//! Every outgoing payload implements [`Validate`]. Checks fail fast: the
//! first violated constraint is returned as an
//! [`ErrorKind::RequestInvalid`](crate::ErrorKind::RequestInvalid) error whose
//! message names the field and the constraint. Composite payloads use
//! [`nested`] and [`each`] so the message also names the enclosing fields:
//!
//! ```text
//! buyer validation failed: phone validation failed: number must be a positive integer of at most 10 digits
//! ```

use crate::{Error, Result};
use regex::Regex;

/// Validate is implemented by every payload that must be checked before it
/// is signed and sent.
///
/// Implementations are pure: no I/O, no mutation.
pub trait Validate {
    /// Check the payload, returning the first violated constraint.
    fn validate(&self) -> Result<()>;

    /// Shortcut for `self.validate().is_ok()`.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

/// Required string fields must not be empty or blank.
pub fn required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::request_invalid(format!("{field} is required")));
    }
    Ok(())
}

/// String length must not exceed `max` characters.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(Error::request_invalid(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// String length must be exactly `expected` characters.
pub fn exact_length(field: &str, value: &str, expected: usize) -> Result<()> {
    let len = value.chars().count();
    if len != expected {
        return Err(Error::request_invalid(format!(
            "{field} must be exactly {expected} characters, got {len}"
        )));
    }
    Ok(())
}

/// Value must lie within `[min, max]`.
pub fn in_range(field: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(Error::request_invalid(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Value must be a positive integer with at most `digits` decimal digits.
pub fn positive_digits(field: &str, value: i64, digits: u32) -> Result<()> {
    let max = 10_i64.checked_pow(digits).map_or(i64::MAX, |v| v - 1);
    if value <= 0 || value > max {
        return Err(Error::request_invalid(format!(
            "{field} must be a positive integer of at most {digits} digits"
        )));
    }
    Ok(())
}

/// Value must be one of `allowed`.
pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(Error::request_invalid(format!(
            "{field} must be one of [{}], got {value:?}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

/// Value must match `pattern`, `expected` describes the format in the
/// error message.
pub fn matches(field: &str, value: &str, pattern: &Regex, expected: &str) -> Result<()> {
    if !pattern.is_match(value) {
        return Err(Error::request_invalid(format!(
            "{field} must match {expected}, got {value:?}"
        )));
    }
    Ok(())
}

/// Value must be an absolute `http` or `https` URL.
pub fn http_url(field: &str, value: &str) -> Result<()> {
    let invalid =
        || Error::request_invalid(format!("{field} must be an absolute http(s) URL, got {value:?}"));

    let uri: http::Uri = value.parse().map_err(|e| invalid().with_source(e))?;
    match (uri.scheme_str(), uri.authority()) {
        (Some("http" | "https"), Some(_)) => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validate a sub-record, prefixing any failure with the containing field.
pub fn nested<T: Validate + ?Sized>(field: &str, value: &T) -> Result<()> {
    value.validate().map_err(|err| wrap(field, err))
}

/// Validate every element of a collection, prefixing any failure with the
/// containing field and the element index.
pub fn each<T: Validate>(field: &str, values: &[T]) -> Result<()> {
    for (idx, value) in values.iter().enumerate() {
        value
            .validate()
            .map_err(|err| wrap(&format!("{field}[{idx}]"), err))?;
    }
    Ok(())
}

fn wrap(field: &str, err: Error) -> Error {
    Error::request_invalid(format!("{field} validation failed: {}", err.message())).with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    static ZIPCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-\d{3}$").unwrap());

    struct Leaf {
        value: i64,
    }

    impl Validate for Leaf {
        fn validate(&self) -> Result<()> {
            positive_digits("value", self.value, 3)
        }
    }

    struct Branch {
        leaf: Leaf,
        leaves: Vec<Leaf>,
    }

    impl Validate for Branch {
        fn validate(&self) -> Result<()> {
            nested("leaf", &self.leaf)?;
            each("leaves", &self.leaves)
        }
    }

    #[test_case("order123", true ; "plain value")]
    #[test_case("", false ; "empty")]
    #[test_case("   ", false ; "blank")]
    fn test_required(value: &str, ok: bool) {
        assert_eq!(required("externalId", value).is_ok(), ok);
    }

    #[test_case(0, false ; "zero")]
    #[test_case(-1, false ; "negative")]
    #[test_case(1, true ; "one")]
    #[test_case(9_999_999_999, true ; "ten digits")]
    #[test_case(10_000_000_000, false ; "eleven digits")]
    fn test_positive_digits(value: i64, ok: bool) {
        assert_eq!(positive_digits("amount", value, 10).is_ok(), ok);
    }

    #[test]
    fn test_max_length_counts_chars() {
        assert!(max_length("city", "Łódź", 4).is_ok());
        let err = max_length("city", "Kraków", 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert_eq!(err.message(), "city must be at most 5 characters, got 6");
    }

    #[test]
    fn test_exact_length() {
        assert!(exact_length("country", "PL", 2).is_ok());
        assert!(exact_length("country", "POL", 2).is_err());
    }

    #[test]
    fn test_in_range() {
        assert!(in_range("validityTime", 60, 60, 864_000).is_ok());
        assert!(in_range("validityTime", 864_000, 60, 864_000).is_ok());
        assert!(in_range("validityTime", 59, 60, 864_000).is_err());
        assert!(in_range("validityTime", 864_001, 60, 864_000).is_err());
    }

    #[test]
    fn test_one_of_message() {
        let err = one_of("currency", "XYZ", &["PLN", "EUR"]).unwrap_err();
        assert_eq!(err.message(), "currency must be one of [PLN, EUR], got \"XYZ\"");
    }

    #[test]
    fn test_matches() {
        assert!(matches("zipcode", "00-123", &ZIPCODE, "NN-NNN").is_ok());
        assert!(matches("zipcode", "00123", &ZIPCODE, "NN-NNN").is_err());
    }

    #[test_case("https://shop.example.com/return", true ; "https")]
    #[test_case("http://localhost:8080/notify", true ; "http with port")]
    #[test_case("ftp://shop.example.com", false ; "other scheme")]
    #[test_case("/relative/path", false ; "relative")]
    #[test_case("not a url", false ; "garbage")]
    fn test_http_url(value: &str, ok: bool) {
        assert_eq!(http_url("continueUrl", value).is_ok(), ok);
    }

    #[test]
    fn test_nested_and_each_wrap_context() {
        let branch = Branch {
            leaf: Leaf { value: -5 },
            leaves: vec![],
        };
        let err = branch.validate().unwrap_err();
        assert_eq!(
            err.message(),
            "leaf validation failed: value must be a positive integer of at most 3 digits"
        );

        let branch = Branch {
            leaf: Leaf { value: 5 },
            leaves: vec![Leaf { value: 1 }, Leaf { value: 1000 }],
        };
        let err = nested("branch", &branch).unwrap_err();
        assert_eq!(
            err.message(),
            "branch validation failed: leaves[1] validation failed: value must be a positive integer of at most 3 digits"
        );
        assert!(err.source_as::<Error>().is_some());
    }
}
