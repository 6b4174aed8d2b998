//! Property tests for suppression rule evaluation.

use std::path::Path;

use proptest::prelude::*;
use regex::Regex;

use actionlint_config::parse_config;

const RULES: &[&str] = &["^unused variable", "shellcheck", "label .+ is unknown"];

fn rules_config() -> actionlint_config::Config {
    let mut source = String::from("paths:\n  \"**\":\n    ignore:\n");
    for rule in RULES {
        source.push_str(&format!("      - \"{rule}\"\n"));
    }
    parse_config(&source, Path::new("test.yaml")).expect("rules config must decode")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an entry ignores a message iff at least one of its rules
    /// matches somewhere within it.
    #[test]
    fn property_suppression_is_union_of_rules(
        message in "[a-z \"]{0,48}(unused variable|shellcheck|label x is unknown)?[a-z ]{0,16}",
    ) {
        let config = rules_config();
        let matched = config.path_configs_for(Path::new("any/file.yml"));
        prop_assert_eq!(matched.len(), 1);

        let expected = RULES
            .iter()
            .any(|r| Regex::new(r).unwrap().is_match(&message));
        prop_assert_eq!(matched[0].ignores(&message), expected);
    }
}
