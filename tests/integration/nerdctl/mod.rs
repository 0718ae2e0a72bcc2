//! Nerdctl integration tests
//!
//! nerdctl prints Docker-compatible inspect records, so the same mapping applies.

#[cfg(all(test, feature = "nerdctl"))]
mod tests {
    use crate::integration::common::*;
    use container2compose::sources::{NerdctlSource, Source};
    use container2compose::Notifier;

    #[test]
    fn test_nerdctl_source_creation() {
        let nerdctl_source = NerdctlSource::new();
        assert!(
            nerdctl_source.is_ok(),
            "Should be able to create NerdctlSource"
        );
        assert_eq!(nerdctl_source.unwrap().name(), "nerdctl");
    }

    #[test]
    fn test_nerdctl_inspect_nonexistent_container() {
        let source = NerdctlSource::new().expect("Should create NerdctlSource");
        let result = source.inspect(NONEXISTENT_CONTAINER, &Notifier::silent());
        assert!(result.is_err(), "Inspecting a missing container should fail");
    }
}
