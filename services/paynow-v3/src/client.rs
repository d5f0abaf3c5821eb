use crate::constants::*;
use crate::request::*;
use crate::response::*;
use crate::sign_request::{Parameters, RequestSigner};
use crate::{Config, Credential};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, StatusCode};
use log::{debug, warn};
use paynow_core::{Context, Error, Result, Validate};
use percent_encoding::utf8_percent_encode;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the Paynow v3 API.
///
/// Every operation validates its payload, signs the request and sends it
/// through the [`Context`]'s [`HttpSend`](paynow_core::HttpSend). Nothing is
/// retried: validation, signing, transport and remote failures come back as
/// errors of distinct [`ErrorKind`](paynow_core::ErrorKind)s.
///
/// State-changing operations take the caller's idempotency key and send it
/// unchanged, so retrying an operation with the same key is safe. Read
/// operations generate a fresh key per call.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    endpoint: String,
    signer: RequestSigner,
}

impl Client {
    /// Create a client talking to the sandbox.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            endpoint: SANDBOX_ENDPOINT.to_string(),
            signer: RequestSigner::new(credential),
        }
    }

    /// Create a client from config, failing if keys are missing.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        Ok(Self {
            ctx,
            endpoint: config.endpoint()?,
            signer: RequestSigner::new(config.credential()?),
        })
    }

    /// Use another endpoint, like [`PRODUCTION_ENDPOINT`].
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Config::default().with_endpoint(endpoint).endpoint()?;
        Ok(self)
    }

    /// Create a payment.
    pub async fn create_payment(
        &self,
        req: &CreatePaymentRequest,
        idempotency_key: &str,
    ) -> Result<CreatePaymentResponse> {
        req.validate()?;
        let req = self.build_request(
            Method::POST,
            "payments",
            idempotency_key,
            &Parameters::new(),
            Some(req),
        )?;
        self.send(req).await
    }

    /// Get the status of a payment.
    pub async fn get_payment_status(&self, payment_id: &str) -> Result<GetPaymentStatusResponse> {
        let path = format!("payments/{}/status", path_segment("paymentId", payment_id)?);
        let req = self.build_query(&path, &Parameters::new())?;
        self.send(req).await
    }

    /// Refund (part of) a payment.
    pub async fn create_refund(
        &self,
        payment_id: &str,
        req: &CreateRefundRequest,
        idempotency_key: &str,
    ) -> Result<CreateRefundResponse> {
        let path = format!("payments/{}/refunds", path_segment("paymentId", payment_id)?);
        req.validate()?;
        let req = self.build_request(
            Method::POST,
            &path,
            idempotency_key,
            &Parameters::new(),
            Some(req),
        )?;
        self.send(req).await
    }

    /// Get the status of a refund.
    pub async fn get_refund_status(&self, refund_id: &str) -> Result<GetRefundStatusResponse> {
        let path = format!("refunds/{}/status", path_segment("refundId", refund_id)?);
        let req = self.build_query(&path, &Parameters::new())?;
        self.send(req).await
    }

    /// Cancel a refund that has not been processed yet.
    pub async fn cancel_refund(&self, refund_id: &str, idempotency_key: &str) -> Result<()> {
        let path = format!("refunds/{}/cancel", path_segment("refundId", refund_id)?);
        let req = self.build_request::<()>(
            Method::POST,
            &path,
            idempotency_key,
            &Parameters::new(),
            None,
        )?;
        self.execute(req).await.map(|_| ())
    }

    /// List payment methods available to the shop.
    pub async fn get_payment_methods(
        &self,
        req: &GetPaymentMethodsRequest,
    ) -> Result<Vec<GetPaymentMethodsResponse>> {
        req.validate()?;
        let req = self.build_query("payments/paymentmethods", &req.to_parameters())?;
        self.send(req).await
    }

    /// Get the data processing notices to show the buyer.
    pub async fn get_data_processing_notices(
        &self,
        req: &GetDataProcessingNoticesRequest,
    ) -> Result<Vec<DataProcessingNotice>> {
        req.validate()?;
        let req = self.build_query("payments/dataprocessing/notices", &req.to_parameters())?;
        self.send(req).await
    }

    /// Update the shop's continue and notification urls.
    pub async fn update_shop_urls(&self, req: &ShopUrlsRequest, idempotency_key: &str) -> Result<()> {
        req.validate()?;
        let req = self.build_request(
            Method::PATCH,
            "configuration/shop/urls",
            idempotency_key,
            &Parameters::new(),
            Some(req),
        )?;
        self.execute(req).await.map(|_| ())
    }

    fn build_query(&self, path: &str, parameters: &Parameters) -> Result<http::Request<Bytes>> {
        let idempotency_key = uuid::Uuid::new_v4().to_string();
        self.build_request::<()>(Method::GET, path, &idempotency_key, parameters, None)
    }

    /// Build and sign a request. The body is serialized once, and those exact
    /// bytes are both signed and sent.
    fn build_request<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        idempotency_key: &str,
        parameters: &Parameters,
        body: Option<&T>,
    ) -> Result<http::Request<Bytes>> {
        check_idempotency_key(idempotency_key)?;

        let mut uri = format!("{}{}", self.endpoint, path);
        if let Some(query) = parameters.to_query_string() {
            uri.push('?');
            uri.push_str(&query);
        }

        let body = match body {
            Some(v) => Bytes::from(serde_json::to_vec(v).map_err(|e| {
                Error::signing_failed("failed to serialize request body").with_source(e)
            })?),
            None => Bytes::new(),
        };

        let mut req = http::Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(IDEMPOTENCY_KEY, idempotency_key)
            .body(body)?;
        self.signer.sign(&mut req)?;
        Ok(req)
    }

    async fn send<T: DeserializeOwned>(&self, req: http::Request<Bytes>) -> Result<T> {
        let resp = self.execute(req).await?;
        serde_json::from_slice(resp.body()).map_err(|e| {
            Error::unexpected(format!(
                "failed to decode response: {}",
                String::from_utf8_lossy(resp.body())
            ))
            .with_source(e)
        })
    }

    async fn execute(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = self.ctx.http_send(req).await?;
        let status = resp.status();
        debug!("{method} {path} responded {status}");

        if status.is_success() {
            return Ok(resp);
        }
        Err(remote_error(status, resp.body()))
    }
}

fn remote_error(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(resp) => Error::remote(status, resp.to_string()).with_source(resp),
        Err(e) => {
            warn!("failed to decode error response with status {status}: {e}");
            Error::remote(
                status,
                format!(
                    "status {}: {}",
                    status.as_u16(),
                    String::from_utf8_lossy(body)
                ),
            )
        }
    }
}

fn check_idempotency_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(Error::request_invalid("idempotency key is required"));
    }
    if key.chars().count() > MAX_IDEMPOTENCY_KEY_LENGTH {
        return Err(Error::request_invalid(format!(
            "idempotency key must be at most {MAX_IDEMPOTENCY_KEY_LENGTH} characters"
        )));
    }
    // Sent as a header and signed from it, so it has to survive `to_str`.
    if !key.chars().all(|c| c.is_ascii_graphic()) {
        return Err(Error::request_invalid(format!(
            "idempotency key must be visible ASCII, got {key:?}"
        )));
    }
    Ok(())
}

fn path_segment(field: &str, id: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(Error::request_invalid(format!("{field} is required")));
    }
    Ok(utf8_percent_encode(id, &PATH_SEGMENT_ENCODE_SET).to_string())
}
