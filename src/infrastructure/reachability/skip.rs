//! No-op reachability checker.

use async_trait::async_trait;
use tracing::debug;

use super::service::ReachabilityChecker;

/// Treats every URL as reachable.
///
/// Used when `REACHABILITY_CHECK=false` and in tests that must not touch
/// the network.
#[derive(Debug, Clone, Copy)]
pub struct SkipReachabilityChecker;

impl SkipReachabilityChecker {
    pub fn new() -> Self {
        debug!("Using SkipReachabilityChecker (reachability checks disabled)");
        Self
    }
}

impl Default for SkipReachabilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReachabilityChecker for SkipReachabilityChecker {
    async fn is_reachable(&self, _url: &str) -> bool {
        true
    }
}
