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

//! Core components for signing and validating payment API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! service crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Validate**: The capability implemented by every outgoing payload, plus reusable constraint checks
//! - **Error**: A single error type whose [`ErrorKind`] tells validation, signing, transport and remote failures apart
//!
//! ## Example
//!
//! ```
//! use paynow_core::validate::{self, Validate};
//! use paynow_core::Result;
//!
//! struct Refund {
//!     amount: i64,
//! }
//!
//! impl Validate for Refund {
//!     fn validate(&self) -> Result<()> {
//!         validate::positive_digits("amount", self.amount, 10)
//!     }
//! }
//!
//! assert!(Refund { amount: 100 }.is_valid());
//! assert!(!Refund { amount: 0 }.is_valid());
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`Validate`]: For local payload validation
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;
pub mod validate;
pub use validate::Validate;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
