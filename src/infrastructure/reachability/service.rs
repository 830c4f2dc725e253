//! Reachability checker trait.

use async_trait::async_trait;

/// Decides whether a target URL answers before it is shortened.
///
/// Used only during input validation; failures of the check itself count as
/// "unreachable" and are never surfaced as errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::reachability::HttpReachabilityChecker`] - outbound HTTP GET
/// - [`crate::infrastructure::reachability::SkipReachabilityChecker`] - always reachable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityChecker: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}
