#![allow(
    clippy::missing_errors_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::task::JoinHandle;
use tracing::{error, info};

use mock_oci::{Faults, RecordedRequest, launch};
use ocirest_core::database::DatabaseClient;
use ocirest_core::identity::IdentityClient;
use ocirest_core::ocvp::OcvpClient;
use ocirest_core::{ApiClient, RetryPolicy};

/// A mock server running on a random local port, stopped when dropped.
#[derive(Debug)]
pub struct TestApp {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestApp {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("binding a local port")?;
        let addr = listener.local_addr().context("local address")?;
        info!(%addr, "launching server");

        let handle = tokio::spawn(async move {
            if let Err(error) = launch(listener).await {
                error!(?error, "server failed");
            }
        });
        let app = Self { addr, handle };
        app.wait_healthy().await?;

        Ok(app)
    }

    async fn wait_healthy(&self) -> anyhow::Result<()> {
        let policy = RetryPolicy::exponential(10)
            .with_min_delay(Duration::from_millis(10))
            .with_max_delay(Duration::from_millis(200));
        self.api()
            .get("/health")
            .with_retry_policy(policy)
            .await
            .context("server not healthy")?;
        Ok(())
    }

    /// A client of the mock, without retries.
    pub fn api(&self) -> ApiClient {
        self.api_with_retry(RetryPolicy::no_retry())
    }

    pub fn api_with_retry(&self, retry_policy: RetryPolicy) -> ApiClient {
        ApiClient::builder()
            .with_host(self.addr.ip().to_string())
            .with_port(self.addr.port())
            .with_retry_policy(retry_policy)
            .build()
            .expect("valid client")
    }

    pub fn identity(&self) -> IdentityClient {
        IdentityClient::new(self.api())
    }

    pub fn database(&self) -> DatabaseClient {
        DatabaseClient::new(self.api())
    }

    pub fn ocvp(&self) -> OcvpClient {
        OcvpClient::new(self.api())
    }

    /// The service requests received by the mock.
    pub async fn requests(&self) -> anyhow::Result<Vec<RecordedRequest>> {
        let result = self.api().get("/mock/requests").await?;
        let requests = result.as_json()?;
        Ok(requests)
    }

    /// Answers the next service requests with the given statuses.
    pub async fn inject_faults(&self, statuses: &[u16]) -> anyhow::Result<()> {
        let faults = Faults {
            statuses: statuses.to_vec(),
            ..Faults::default()
        };
        self.api().post("/mock/faults").json(&faults)?.await?;
        Ok(())
    }

    /// Answers the next service requests with `200 OK` and a body of the wrong shape.
    pub async fn inject_malformed(&self, count: usize) -> anyhow::Result<()> {
        let faults = Faults {
            malformed: count,
            ..Faults::default()
        };
        self.api().post("/mock/faults").json(&faults)?.await?;
        Ok(())
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
