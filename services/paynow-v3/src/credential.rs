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

use paynow_core::utils::Redact;
use paynow_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Credential for Paynow.
///
/// The api key is sent verbatim in the `Api-Key` header, the signature key
/// only ever keys the request signature and is never transmitted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Api key
    pub api_key: String,
    /// Signature key
    pub signature_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("signature_key", &Redact::from(&self.signature_key))
            .finish()
    }
}

impl Credential {
    /// Create a credential, both keys must be non-empty.
    pub fn new(api_key: &str, signature_key: &str) -> Result<Self> {
        let cred = Self {
            api_key: api_key.to_string(),
            signature_key: signature_key.to_string(),
        };
        cred.check()?;
        Ok(cred)
    }

    /// Check if both keys are present.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    fn check(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::credential_invalid("api key must not be empty"));
        }
        if self.signature_key.trim().is_empty() {
            return Err(Error::credential_invalid("signature key must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paynow_core::ErrorKind;

    #[test]
    fn test_credential_requires_both_keys() {
        assert!(Credential::new("api-key", "signature-key").is_ok());

        let err = Credential::new("", "signature-key").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.to_string(), "api key must not be empty");

        let err = Credential::new("api-key", " ").unwrap_err();
        assert_eq!(err.to_string(), "signature key must not be empty");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::new(
            "97a55694-5478-43b5-b406-fb49ebfdd2b5",
            "b305b996-bca5-4404-a0b7-2ccea3d2b64b",
        )
        .unwrap();

        let printed = format!("{cred:?}");
        assert!(!printed.contains("5478-43b5"));
        assert!(!printed.contains("bca5-4404"));
        assert!(printed.contains("97a***2b5"));
    }
}
