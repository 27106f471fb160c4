//! Static description of one selectable imagery source.

use crate::provider::ProviderConfig;
use crate::relay::ProxyDecision;
use crate::relay::RelayEndpoint;
use std::sync::Arc;

/// How a source routes its requests through the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayPolicy {
    /// Never relay, whatever the environment supports.
    Never,
    /// Relay only when the runtime lacks cross-origin support.
    IfNeeded,
    /// Always relay; the upstream service refuses direct cross-origin reads.
    Always,
}

impl RelayPolicy {
    /// Picks the relay argument for a provider under `decision`.
    pub fn select(&self, decision: &ProxyDecision) -> Option<Arc<RelayEndpoint>> {
        match self {
            Self::Never => None,
            Self::IfNeeded => decision.endpoint().cloned(),
            Self::Always => Some(Arc::clone(decision.relay())),
        }
    }
}

/// One entry of a source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Display name
    pub name: &'static str,
    /// Logical icon path, resolved with the resource locator
    pub icon: &'static str,
    /// Tooltip text
    pub tooltip: &'static str,
    /// Provider construction parameters
    pub provider: ProviderConfig,
    /// Relay routing for this source
    pub relay: RelayPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(required: bool) -> ProxyDecision {
        ProxyDecision::new(required, Arc::new(RelayEndpoint::new("http://relay/")))
    }

    #[test]
    fn test_never_ignores_environment() {
        assert!(RelayPolicy::Never.select(&decision(true)).is_none());
        assert!(RelayPolicy::Never.select(&decision(false)).is_none());
    }

    #[test]
    fn test_if_needed_follows_environment() {
        let required = decision(true);
        let relay = RelayPolicy::IfNeeded.select(&required).unwrap();
        assert!(Arc::ptr_eq(&relay, required.relay()));

        assert!(RelayPolicy::IfNeeded.select(&decision(false)).is_none());
    }

    #[test]
    fn test_always_relays() {
        for required in [true, false] {
            let decision = decision(required);
            let relay = RelayPolicy::Always.select(&decision).unwrap();
            assert!(Arc::ptr_eq(&relay, decision.relay()));
        }
    }
}
