use crate::constants::{API_KEY, IDEMPOTENCY_KEY, SIGNATURE};
use crate::Credential;
use bytes::Bytes;
use http::HeaderValue;
use log::debug;
use paynow_core::hash::base64_hmac_sha256;
use paynow_core::{Error, Result};
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Query parameters normalized for signing.
///
/// Every name maps to a list of values, a single value is stored as a
/// one-element list. Names are kept sorted so the canonical form never
/// depends on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, Vec<String>>);

impl Parameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw (percent-encoded) query string, repeated names collect
    /// all their values in order.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            params.append(k.into_owned(), v.into_owned());
        }
        params
    }

    /// Set `name` to `values`, replacing any previous values.
    pub fn insert(&mut self, name: impl Into<String>, values: impl IntoParameterValues) {
        self.0.insert(name.into(), values.into_parameter_values());
    }

    /// Add one more value to `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Get all values of `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in sorted name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Encode as a query string, `None` when there are no parameters.
    pub fn to_query_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut s = form_urlencoded::Serializer::new(String::new());
        for (name, values) in self.iter() {
            for value in values {
                s.append_pair(name, value);
            }
        }
        Some(s.finish())
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: IntoParameterValues,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Values accepted for a query parameter: a single string or a list of them.
pub trait IntoParameterValues {
    /// Normalize into a list of values.
    fn into_parameter_values(self) -> Vec<String>;
}

impl IntoParameterValues for &str {
    fn into_parameter_values(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoParameterValues for String {
    fn into_parameter_values(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoParameterValues for &String {
    fn into_parameter_values(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoParameterValues for Vec<String> {
    fn into_parameter_values(self) -> Vec<String> {
        self
    }
}

impl IntoParameterValues for Vec<&str> {
    fn into_parameter_values(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoParameterValues for &[&str] {
    fn into_parameter_values(self) -> Vec<String> {
        self.iter().map(|v| v.to_string()).collect()
    }
}

impl<const N: usize> IntoParameterValues for [&str; N] {
    fn into_parameter_values(self) -> Vec<String> {
        self.iter().map(|v| v.to_string()).collect()
    }
}

#[derive(Debug, Serialize)]
struct SigningHeaders<'a> {
    #[serde(rename = "Api-Key")]
    api_key: &'a str,
    #[serde(rename = "Idempotency-Key", skip_serializing_if = "Option::is_none")]
    idempotency_key: Option<&'a str>,
}

/// The canonical structure whose JSON form is signed.
///
/// ```json
/// {"headers":{"Api-Key":"...","Idempotency-Key":"..."},"parameters":{"amount":["100"]},"body":""}
/// ```
///
/// `parameters` is always present, `{}` when empty. `body` is the exact
/// request body, `""` for bodyless requests.
#[derive(Debug, Serialize)]
pub struct SigningPayload<'a> {
    headers: SigningHeaders<'a>,
    parameters: &'a Parameters,
    body: &'a str,
}

impl<'a> SigningPayload<'a> {
    /// Build the payload. `Some("")` keeps an empty `Idempotency-Key` member,
    /// `None` leaves the member out.
    pub fn new(
        api_key: &'a str,
        idempotency_key: Option<&'a str>,
        body: &'a str,
        parameters: &'a Parameters,
    ) -> Self {
        Self {
            headers: SigningHeaders {
                api_key,
                idempotency_key,
            },
            parameters,
            body,
        }
    }

    /// Serialize into the canonical string.
    pub fn canonical_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            Error::signing_failed("failed to serialize signing payload").with_source(e)
        })
    }

    /// Sign the canonical string with `signature_key`.
    pub fn sign(&self, signature_key: &str) -> Result<String> {
        let canonical = self.canonical_string()?;
        debug!(
            "signing payload: {} bytes, idempotency key present: {}",
            canonical.len(),
            self.headers.idempotency_key.is_some()
        );

        Ok(base64_hmac_sha256(
            signature_key.as_bytes(),
            canonical.as_bytes(),
        ))
    }
}

/// Compute the `Signature` header value.
///
/// The result is the base64 HMAC-SHA256, keyed by `signature_key`, of the
/// canonical JSON built from the api key, the idempotency key (left out when
/// empty), the normalized parameters and the body.
pub fn generate_signature(
    api_key: &str,
    signature_key: &str,
    idempotency_key: &str,
    body: &str,
    parameters: &Parameters,
) -> Result<String> {
    let idempotency_key = (!idempotency_key.is_empty()).then_some(idempotency_key);
    SigningPayload::new(api_key, idempotency_key, body, parameters).sign(signature_key)
}

/// RequestSigner signs fully built requests.
///
/// It sets `Api-Key`, then signs the request's own `Idempotency-Key` header,
/// query string and body, so the signature always covers exactly what is
/// sent.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
}

impl RequestSigner {
    /// Create a new signer for this credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Sign the request in place by inserting `Api-Key` and `Signature`.
    pub fn sign(&self, req: &mut http::Request<Bytes>) -> Result<()> {
        let api_key = HeaderValue::from_str(&self.credential.api_key)?;
        req.headers_mut().insert(API_KEY, api_key);

        let idempotency_key = match req.headers().get(IDEMPOTENCY_KEY) {
            Some(v) => v.to_str()?,
            None => "",
        };
        let parameters = req
            .uri()
            .query()
            .map(Parameters::from_query)
            .unwrap_or_default();
        let body = std::str::from_utf8(req.body()).map_err(|e| {
            Error::signing_failed("request body is not valid utf-8").with_source(e)
        })?;

        let signature = generate_signature(
            &self.credential.api_key,
            &self.credential.signature_key,
            idempotency_key,
            body,
            &parameters,
        )?;

        let mut value = HeaderValue::from_str(&signature)?;
        value.set_sensitive(true);
        req.headers_mut().insert(SIGNATURE, value);
        Ok(())
    }
}
