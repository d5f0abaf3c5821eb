//! Request payloads.
//!
//! Every payload implements [`Validate`](paynow_core::Validate); the client
//! validates before signing, so an invalid payload never reaches the
//! network.

mod buyer;
pub use buyer::AddressType;
pub use buyer::BuyerAddress;
pub use buyer::BuyerInfo;
pub use buyer::Phone;

mod payment;
pub use payment::CreatePaymentRequest;
pub use payment::OrderItem;

mod refund;
pub use refund::CreateRefundRequest;

mod configuration;
pub use configuration::ShopUrlsRequest;

mod query;
pub use query::GetDataProcessingNoticesRequest;
pub use query::GetPaymentMethodsRequest;
