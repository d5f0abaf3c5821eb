//! Paynow v3 service client.
//!
//! Requests are validated locally, signed with the v3 signature scheme and
//! sent through a [`Context`](paynow_core::Context).
//!
//! ```no_run
//! use paynow_core::{Context, OsEnv};
//! use paynow_http_send_reqwest::ReqwestHttpSend;
//! use paynow_v3::{BuyerInfo, Client, Config, CreatePaymentRequest};
//!
//! # async fn example() -> paynow_core::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let client = Client::from_config(ctx.clone(), &Config::from_env(&ctx))?;
//!
//! let req = CreatePaymentRequest::new(
//!     "order123",
//!     10000,
//!     "Test payment",
//!     BuyerInfo::new("jan.kowalski@example.com"),
//! );
//! let resp = client.create_payment(&req, "order123").await?;
//! println!("pay at {:?}", resp.redirect_url);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::PRODUCTION_ENDPOINT;
pub use constants::SANDBOX_ENDPOINT;

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;

mod sign_request;
pub use sign_request::generate_signature;
pub use sign_request::IntoParameterValues;
pub use sign_request::Parameters;
pub use sign_request::RequestSigner;
pub use sign_request::SigningPayload;

pub mod request;
pub use request::*;

pub mod response;
pub use response::*;

mod notification;
pub use notification::parse_notification;
pub use notification::verify_notification;

mod client;
pub use client::Client;
