//! Tests against the live Paynow sandbox.
//!
//! Enabled with `PAYNOW_V3_TEST=on`, reading keys from `PAYNOW_API_KEY` and
//! `PAYNOW_SIGNATURE_KEY` (a `.env` file works too).

use std::env;

use anyhow::Result;
use log::{debug, warn};
use paynow_core::{Context, ErrorKind, OsEnv};
use paynow_http_send_reqwest::ReqwestHttpSend;
use paynow_v3::{
    BuyerInfo, Client, Config, CreatePaymentRequest, ErrorResponse,
    GetDataProcessingNoticesRequest, GetPaymentMethodsRequest,
};

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PAYNOW_V3_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::from_env(&ctx);
    let client = Client::from_config(ctx, &config)
        .expect("env PAYNOW_API_KEY and PAYNOW_SIGNATURE_KEY must set");

    Some(client)
}

#[tokio::test]
async fn test_sandbox_payment_methods() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PAYNOW_V3_TEST is not set, skipped");
        return Ok(());
    };

    let methods = client
        .get_payment_methods(&GetPaymentMethodsRequest::default())
        .await?;
    debug!("got payment methods: {methods:?}");
    assert!(!methods.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_sandbox_data_processing_notices() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PAYNOW_V3_TEST is not set, skipped");
        return Ok(());
    };

    let req = GetDataProcessingNoticesRequest {
        locale: Some("pl-PL".to_string()),
    };
    let notices = client.get_data_processing_notices(&req).await?;
    debug!("got notices: {notices:?}");
    Ok(())
}

#[tokio::test]
async fn test_sandbox_payment_flow() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PAYNOW_V3_TEST is not set, skipped");
        return Ok(());
    };

    let external_id = uuid::Uuid::new_v4().to_string();
    let req = CreatePaymentRequest::new(
        &external_id,
        1500,
        "paynow-v3 sandbox test",
        BuyerInfo::new("jan.kowalski@example.com"),
    );
    let created = client.create_payment(&req, &external_id).await?;
    debug!("created payment: {created:?}");
    assert!(created.redirect_url.is_some());

    let status = client.get_payment_status(&created.payment_id).await?;
    assert_eq!(status.payment_id, created.payment_id);
    Ok(())
}

#[tokio::test]
async fn test_sandbox_unknown_payment() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PAYNOW_V3_TEST is not set, skipped");
        return Ok(());
    };

    let err = client
        .get_payment_status("NOSUCHPAYMENT")
        .await
        .expect_err("unknown payment must fail");
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(err.status().is_some());
    debug!("remote error body: {:?}", ErrorResponse::from_error(&err));
    Ok(())
}
