//! HTTP-based reachability checker.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::service::ReachabilityChecker;

/// Issues a GET request and accepts any 2xx or 3xx answer.
#[derive(Debug, Clone)]
pub struct HttpReachabilityChecker {
    client: Client,
}

impl HttpReachabilityChecker {
    /// Builds a checker whose requests give up after `timeout`.
    ///
    /// Redirects are not followed: a 3xx already proves the host answers.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

/// Status codes that count as reachable.
pub fn is_reachable_status(status: u16) -> bool {
    (200..400).contains(&status)
}

#[async_trait]
impl ReachabilityChecker for HttpReachabilityChecker {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url, status, "Reachability check answered");
                is_reachable_status(status)
            }
            Err(e) => {
                warn!(url, error = %e, "Reachability check failed");
                false
            }
        }
    }
}
