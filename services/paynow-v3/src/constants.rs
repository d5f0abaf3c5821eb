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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in paynow requests.
pub const API_KEY: &str = "Api-Key";
pub const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
pub const SIGNATURE: &str = "Signature";

// Env values used by paynow clients.
pub const PAYNOW_API_KEY: &str = "PAYNOW_API_KEY";
pub const PAYNOW_SIGNATURE_KEY: &str = "PAYNOW_SIGNATURE_KEY";
pub const PAYNOW_ENDPOINT: &str = "PAYNOW_ENDPOINT";

/// Sandbox base URL, used when no endpoint is configured.
pub const SANDBOX_ENDPOINT: &str = "https://api.sandbox.paynow.pl/v3/";
/// Production base URL.
pub const PRODUCTION_ENDPOINT: &str = "https://api.paynow.pl/v3/";

// Limits enforced before sending.
pub const MAX_AMOUNT_DIGITS: u32 = 10;
pub const MIN_VALIDITY_TIME: i64 = 60;
pub const MAX_VALIDITY_TIME: i64 = 864_000;
pub const MAX_IDEMPOTENCY_KEY_LENGTH: usize = 45;

pub const CURRENCIES: &[&str] = &["PLN", "EUR", "USD", "GBP", "CZK"];
pub const REFUND_REASONS: &[&str] = &["RMA", "REFUND_BEFORE_14", "REFUND_AFTER_14", "OTHER"];
pub const PAYMENT_METHOD_TYPES: &[&str] = &[
    "APPLE_PAY",
    "BLIK",
    "CARD",
    "ECOMMERCE",
    "GOOGLE_PAY",
    "PAYPO",
    "PBL",
];

/// AsciiSet for ids placed in a single path segment.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
