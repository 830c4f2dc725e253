//! Outbound reachability checks for URLs submitted for shortening.
//!
//! - [`HttpReachabilityChecker`] - GET with a short timeout, 2xx/3xx is reachable
//! - [`SkipReachabilityChecker`] - accepts everything

mod http;
mod service;
mod skip;

pub use http::{HttpReachabilityChecker, is_reachable_status};
pub use service::ReachabilityChecker;
pub use skip::SkipReachabilityChecker;

#[cfg(test)]
pub use service::MockReachabilityChecker;
