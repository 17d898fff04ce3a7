#![allow(missing_docs)]

use std::net::SocketAddr;
use std::time::Duration;

use ocirest_core::database::ListDbHomePatchesRequest;
use ocirest_core::identity::IdentityClient;
use ocirest_core::ocvp::ListSupportedVmwareSoftwareVersionsRequest;
use ocirest_core::{ApiClient, ApiClientError, ErrorKind, RetryPolicy};
use rstest::rstest;

mod common;
pub use self::common::*;

/// An address where nothing listens.
fn closed_addr() -> SocketAddr {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("free port")
}

fn client_for(addr: SocketAddr, retry_policy: RetryPolicy) -> ApiClient {
    ApiClient::builder()
        .with_host(addr.ip().to_string())
        .with_port(addr.port())
        .with_retry_policy(retry_policy)
        .build()
        .expect("valid client")
}

async fn launch_later(addr: SocketAddr) -> anyhow::Result<()> {
    tokio::time::sleep(Duration::from_millis(100)).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    mock_oci::launch(listener).await
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    init_tracing();
    let identity = IdentityClient::new(client_for(closed_addr(), RetryPolicy::no_retry()));

    let error = identity
        .list_api_keys(USER_ID)
        .await
        .expect_err("nothing listens");

    assert_eq!(error.kind(), ErrorKind::Transport);
    assert_eq!(error.status_code(), None);
    assert!(matches!(error, ApiClientError::ReqwestError(_)), "{error:?}");
}

#[tokio::test]
async fn test_connection_refused_is_retried_until_the_server_is_up() -> anyhow::Result<()> {
    init_tracing();
    let addr = closed_addr();
    let server = tokio::spawn(launch_later(addr));
    let retry_policy = RetryPolicy::exponential(20)
        .with_min_delay(Duration::from_millis(20))
        .with_max_delay(Duration::from_millis(100));
    let identity = IdentityClient::new(client_for(addr, retry_policy));

    let response = identity.list_api_keys(USER_ID).await;
    server.abort();

    assert!(response?.items.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_malformed_list_body_is_a_deserialization_error(
    #[future] app: TestApp,
) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_malformed(1).await?;

    let error = app
        .identity()
        .list_api_keys(USER_ID)
        .await
        .expect_err("object instead of array");

    assert_eq!(error.kind(), ErrorKind::Deserialization);
    assert_eq!(error.status_code(), None);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_malformed_collection_reports_the_failing_path(
    #[future] app: TestApp,
) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_malformed(1).await?;

    let error = app
        .ocvp()
        .list_supported_vmware_software_versions(ListSupportedVmwareSoftwareVersionsRequest::new(
            "ocid1.compartment.oc1..mock",
        ))
        .await
        .expect_err("string instead of items");

    assert_eq!(error.kind(), ErrorKind::Deserialization);
    let ApiClientError::JsonError { path, body, .. } = &error else {
        panic!("expected a JSON error, got {error:?}");
    };
    assert_eq!(path, "/20200501/supportedVmwareSoftwareVersions items");
    insta::assert_snapshot!(body, @r#"{"items":"malformed"}"#);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_malformed_body_is_not_retried(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    app.inject_malformed(1).await?;
    let api = app.api_with_retry(
        RetryPolicy::exponential(3).with_min_delay(Duration::from_millis(5)),
    );

    let error = api
        .execute(&ListDbHomePatchesRequest::new("ocid1.dbhome.oc1..patched"))
        .await
        .expect_err("object instead of array");

    assert_eq!(error.kind(), ErrorKind::Deserialization);
    assert_eq!(app.requests().await?.len(), 1);
    Ok(())
}
