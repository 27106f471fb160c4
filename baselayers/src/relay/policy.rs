//! One-shot relay decision.

use super::detector::CrossOriginDetector;
use super::endpoint::RelayEndpoint;
use std::sync::Arc;
use tracing::info;

/// Relay used when no other is configured.
pub const DEFAULT_RELAY_URL: &str = "http://cesium.agi.com/proxy/";

/// Outcome of [`ProxyPolicy::resolve`].
///
/// `required` reflects only the environment-driven fallback. Sources that
/// always relay use [`ProxyDecision::relay`] regardless of it, so the relay
/// instance exists either way and is the same `Arc` for every consumer of
/// one decision.
#[derive(Debug, Clone)]
pub struct ProxyDecision {
    required: bool,
    relay: Arc<RelayEndpoint>,
}

impl ProxyDecision {
    /// Builds a decision directly, bypassing detection.
    pub fn new(required: bool, relay: Arc<RelayEndpoint>) -> Self {
        Self { required, relay }
    }

    /// Whether the environment needs imagery routed through the relay.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The relay for "if needed" sources: present only when required.
    pub fn endpoint(&self) -> Option<&Arc<RelayEndpoint>> {
        self.required.then_some(&self.relay)
    }

    /// The shared relay, for sources that relay unconditionally.
    pub fn relay(&self) -> &Arc<RelayEndpoint> {
        &self.relay
    }
}

/// Decides whether imagery fetches need a relay.
pub struct ProxyPolicy {
    detector: Arc<dyn CrossOriginDetector>,
    relay_url: String,
}

impl ProxyPolicy {
    /// Creates a policy that consults `detector` and relays via `relay_url`.
    pub fn new(detector: Arc<dyn CrossOriginDetector>, relay_url: impl Into<String>) -> Self {
        Self {
            detector,
            relay_url: relay_url.into(),
        }
    }

    /// Creates a policy using [`DEFAULT_RELAY_URL`].
    pub fn with_default_relay(detector: Arc<dyn CrossOriginDetector>) -> Self {
        Self::new(detector, DEFAULT_RELAY_URL)
    }

    /// Returns the configured relay base URL.
    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// Queries the detector once and returns the decision.
    ///
    /// Each call creates one new [`RelayEndpoint`]; everything derived from
    /// the returned decision shares it.
    pub fn resolve(&self) -> ProxyDecision {
        let supported = self.detector.supports_cross_origin_imagery();
        let relay = Arc::new(RelayEndpoint::new(self.relay_url.clone()));

        info!(
            cross_origin_supported = supported,
            relay = %relay,
            "Resolved imagery relay policy"
        );

        ProxyDecision::new(!supported, relay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::StaticDetector;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_supported_does_not_require_relay() {
        let policy = ProxyPolicy::with_default_relay(Arc::new(StaticDetector::supported()));
        let decision = policy.resolve();

        assert!(!decision.is_required());
        assert!(decision.endpoint().is_none());
        assert_eq!(decision.relay().base_url(), DEFAULT_RELAY_URL);
    }

    #[test]
    fn test_unsupported_requires_relay() {
        let policy = ProxyPolicy::new(Arc::new(StaticDetector::unsupported()), "http://relay/");
        let decision = policy.resolve();

        assert!(decision.is_required());
        let endpoint = decision.endpoint().expect("relay should be required");
        assert_eq!(endpoint.base_url(), "http://relay/");
        assert!(Arc::ptr_eq(endpoint, decision.relay()));
    }

    #[test]
    fn test_detector_queried_once_per_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let policy = ProxyPolicy::with_default_relay(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }));

        let _ = policy.resolve();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let _ = policy.resolve();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cloned_decision_shares_relay() {
        let policy = ProxyPolicy::with_default_relay(Arc::new(StaticDetector::unsupported()));
        let decision = policy.resolve();
        let cloned = decision.clone();
        assert!(Arc::ptr_eq(decision.relay(), cloned.relay()));
    }
}
