#![allow(missing_docs)]

use std::time::Duration;

use ocirest_core::identity::{IdentityClient, UploadApiKeyRequest};
use ocirest_core::{ErrorKind, RequestMetadata, RetryPolicy};
use rstest::rstest;

mod common;
pub use self::common::*;

fn fast_retry(max_attempts: usize) -> RetryPolicy {
    RetryPolicy::exponential(max_attempts)
        .with_min_delay(Duration::from_millis(5))
        .with_max_delay(Duration::from_millis(20))
}

#[rstest]
#[tokio::test]
async fn test_retry_until_success(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_faults(&[503, 429]).await?;
    let identity = IdentityClient::new(app.api_with_retry(fast_retry(3)));

    let response = identity.list_api_keys(USER_ID).await?;

    assert!(response.items.is_empty());
    assert_eq!(app.requests().await?.len(), 3);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_retry_gives_up_after_max_attempts(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_faults(&[500, 502, 504]).await?;
    let identity = IdentityClient::new(app.api_with_retry(fast_retry(2)));

    let error = identity
        .list_api_keys(USER_ID)
        .await
        .expect_err("still failing");

    assert_eq!(error.kind(), ErrorKind::Service);
    assert_eq!(error.status_code(), Some(502));
    assert_eq!(app.requests().await?.len(), 2);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_no_retry_on_client_error(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_faults(&[400]).await?;
    let identity = IdentityClient::new(app.api_with_retry(fast_retry(3)));

    let error = identity
        .list_api_keys(USER_ID)
        .await
        .expect_err("bad request");

    assert_eq!(error.status_code(), Some(400));
    assert_eq!(app.requests().await?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_default_policy_does_not_retry(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_faults(&[503]).await?;

    let error = app
        .identity()
        .list_api_keys(USER_ID)
        .await
        .expect_err("unavailable");

    assert_eq!(error.status_code(), Some(503));
    assert_eq!(app.requests().await?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_retried_upload_reuses_generated_token(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_faults(&[500]).await?;
    let request = UploadApiKeyRequest {
        metadata: RequestMetadata {
            retry_policy: Some(fast_retry(3)),
        },
        ..UploadApiKeyRequest::new(USER_ID, PUBLIC_KEY)
    };

    let response = app.api().execute(&request).await?;

    assert_eq!(response.api_key.user_id.as_deref(), Some(USER_ID));
    let requests = app.requests().await?;
    let tokens = requests
        .iter()
        .map(|it| it.headers.get("opc-retry-token").cloned())
        .collect::<Vec<_>>();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.first().is_some_and(Option::is_some), "{tokens:?}");
    assert_eq!(tokens.first(), tokens.last());
    Ok(())
}
