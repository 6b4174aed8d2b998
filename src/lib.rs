//! actionlint-config - configuration file support for a GitHub Actions
//! workflow linter
//!
//! Loads the `actionlint.yaml` file usually put in a repository's
//! `.github` directory. A configuration declares known self-hosted runner
//! labels and configuration variable names, and maps glob patterns to
//! "ignore" rules that suppress matching error messages for matching
//! files. Loading is one-shot and fail-fast: every glob and regex is
//! compiled up front, and the resulting [`Config`] is immutable and safe
//! to share across analysis workers.

pub mod config;
pub mod error;
pub mod loader;
pub mod pattern;
pub mod yaml;

// Re-exports for convenience
pub use config::{Config, PathConfig, PathConfigs};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_repo_config, parse_config, read_config_file, write_default_config_file};
pub use pattern::{GlobPattern, PathPattern, RegexPattern, TextPattern};
