//! Cross-origin capability detection.

/// Answers whether the runtime can load cross-origin imagery without a relay.
///
/// The query is a synchronous capability probe and cannot fail.
pub trait CrossOriginDetector: Send + Sync {
    /// Returns `true` if imagery from another origin can be read directly.
    fn supports_cross_origin_imagery(&self) -> bool;
}

/// Closures act as detectors, which keeps test doubles short.
impl<F> CrossOriginDetector for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn supports_cross_origin_imagery(&self) -> bool {
        self()
    }
}

/// Detector with a fixed answer, typically taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticDetector {
    supported: bool,
}

impl StaticDetector {
    /// Creates a detector that always answers `supported`.
    pub fn new(supported: bool) -> Self {
        Self { supported }
    }

    /// Runtime reads cross-origin imagery directly.
    pub fn supported() -> Self {
        Self::new(true)
    }

    /// Runtime needs a relay for cross-origin imagery.
    pub fn unsupported() -> Self {
        Self::new(false)
    }
}

impl Default for StaticDetector {
    /// Native hosts have no same-origin restriction.
    fn default() -> Self {
        Self::supported()
    }
}

impl CrossOriginDetector for StaticDetector {
    fn supports_cross_origin_imagery(&self) -> bool {
        self.supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_static_detector_answers() {
        assert!(StaticDetector::supported().supports_cross_origin_imagery());
        assert!(!StaticDetector::unsupported().supports_cross_origin_imagery());
        assert!(StaticDetector::default().supports_cross_origin_imagery());
    }

    #[test]
    fn test_closure_as_detector() {
        let detector: Arc<dyn CrossOriginDetector> = Arc::new(|| false);
        assert!(!detector.supports_cross_origin_imagery());
    }

    #[test]
    fn test_detector_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StaticDetector>();
    }
}
