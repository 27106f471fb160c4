//! Relay selection for cross-origin imagery requests.
//!
//! Some runtimes cannot read imagery from another origin directly. For those,
//! every request is rewritten to go through a relay endpoint that fetches the
//! resource on the caller's behalf.
//!
//! # Components
//!
//! - [`CrossOriginDetector`] - answers whether the runtime supports
//!   cross-origin imagery natively
//! - [`RelayEndpoint`] - the intermediary URL and request rewriting
//! - [`ProxyPolicy`] - queries the detector once and produces a [`ProxyDecision`]
//!
//! # Example
//!
//! ```
//! use baselayers::relay::{ProxyPolicy, StaticDetector};
//! use std::sync::Arc;
//!
//! let policy = ProxyPolicy::new(
//!     Arc::new(StaticDetector::unsupported()),
//!     "http://cesium.agi.com/proxy/",
//! );
//! let decision = policy.resolve();
//! assert!(decision.is_required());
//! assert!(decision.endpoint().is_some());
//! ```

mod detector;
mod endpoint;
mod policy;

pub use detector::{CrossOriginDetector, StaticDetector};
pub use endpoint::RelayEndpoint;
pub use policy::{ProxyDecision, ProxyPolicy, DEFAULT_RELAY_URL};
