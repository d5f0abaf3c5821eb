use crate::constants::*;
use crate::Credential;
use paynow_core::utils::Redact;
use paynow_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for Paynow clients.
///
/// Keys have no defaults: they must be set explicitly or come from the
/// environment. Only `endpoint` falls back to [`SANDBOX_ENDPOINT`].
#[derive(Clone, Default)]
pub struct Config {
    /// Api key, sent in the `Api-Key` header
    pub api_key: Option<String>,
    /// Signature key used to sign requests
    pub signature_key: Option<String>,
    /// Base URL all operation paths are joined to
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &Redact::from(&self.api_key))
            .field("signature_key", &Redact::from(&self.signature_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            api_key: ctx.env_var(PAYNOW_API_KEY),
            signature_key: ctx.env_var(PAYNOW_SIGNATURE_KEY),
            endpoint: ctx.env_var(PAYNOW_ENDPOINT),
        }
    }

    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Build the credential, failing if either key is missing.
    pub fn credential(&self) -> Result<Credential> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config_invalid(format!("{PAYNOW_API_KEY} is not set")))?;
        let signature_key = self
            .signature_key
            .as_deref()
            .ok_or_else(|| Error::config_invalid(format!("{PAYNOW_SIGNATURE_KEY} is not set")))?;

        Credential::new(api_key, signature_key)
    }

    /// Resolve the endpoint, always ending with `/`.
    pub fn endpoint(&self) -> Result<String> {
        let endpoint = self.endpoint.as_deref().unwrap_or(SANDBOX_ENDPOINT).trim();

        let uri: http::Uri = endpoint.parse().map_err(|e| {
            Error::config_invalid(format!("endpoint {endpoint:?} is not a valid URL")).with_source(e)
        })?;
        if !matches!(uri.scheme_str(), Some("http" | "https")) || uri.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "endpoint {endpoint:?} must be an absolute http(s) URL"
            )));
        }

        if endpoint.ends_with('/') {
            Ok(endpoint.to_string())
        } else {
            Ok(format!("{endpoint}/"))
        }
    }
}
