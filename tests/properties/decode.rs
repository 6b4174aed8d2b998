//! Property tests for configuration decoding.

use std::path::Path;

use proptest::prelude::*;

use actionlint_config::parse_config;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_config` never panics on arbitrary small input.
    #[test]
    fn property_parse_config_never_panics(source in "(?s).{0,256}") {
        let _ = parse_config(&source, Path::new("test.yaml"));
    }

    /// PROPERTY: a decoded label list round-trips the generated strings
    /// in order.
    #[test]
    fn property_labels_round_trip(
        labels in proptest::collection::vec("[A-Za-z0-9_-]{1,12}", 0..=6),
    ) {
        let mut source = String::from("self-hosted-runner:\n  labels:\n");
        for label in &labels {
            source.push_str(&format!("    - \"{label}\"\n"));
        }

        let config = parse_config(&source, Path::new("test.yaml"))
            .expect("constructed config must decode");
        prop_assert_eq!(config.runner_labels, labels);
    }
}
