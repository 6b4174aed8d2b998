//! Configuration model for the linter.
//!
//! A configuration customizes two behaviors: declaring known self-hosted
//! runner labels / configuration variable names, and ignoring specific
//! error messages for files matching glob patterns. The model is built
//! once by the loader and is immutable afterwards, so it can be shared
//! read-only across analysis workers.
//!
//! The "paths" mapping and its entries are decoded by hand from the
//! positioned tree in [`crate::yaml`] so that every schema violation can
//! name the offending key or pattern and its exact source position. The
//! simple top-level fields go through the same tree; unrecognized keys
//! outside a path entry are ignored.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::pattern::{GlobPattern, PathPattern, RegexPattern, TextPattern};
use crate::yaml::Node;

fn expected_kind(name: &str, expected: &'static str, node: &Node) -> ConfigError {
    ConfigError::ExpectedKind {
        name: name.to_string(),
        expected,
        line: node.line,
        col: node.col,
    }
}

/// Decode a sequence of scalar strings. A null node decodes as empty.
fn decode_string_sequence(name: &str, node: &Node) -> ConfigResult<Vec<String>> {
    if node.is_null() {
        return Ok(Vec::new());
    }
    let items = node
        .as_sequence()
        .ok_or_else(|| expected_kind(name, "sequence", node))?;
    items
        .iter()
        .map(|item| {
            item.as_scalar()
                .map(str::to_string)
                .ok_or_else(|| expected_kind(name, "scalar", item))
        })
        .collect()
}

/// Configuration for a specific file path pattern. This is a value of the
/// "paths" mapping in the configuration file.
pub struct PathConfig {
    glob: Box<dyn PathPattern>,
    /// Compiled "ignore" rules, matched against error messages
    ignore: Vec<Box<dyn TextPattern>>,
}

impl PathConfig {
    /// Decode one "paths" entry. `pattern` is the already-compiled glob
    /// key; `node` is the entry value, which must be a mapping whose only
    /// recognized key is "ignore".
    fn decode(pattern: &str, glob: Box<dyn PathPattern>, node: &Node) -> ConfigResult<Self> {
        let mut ignore: Vec<Box<dyn TextPattern>> = Vec::new();
        if !node.is_null() {
            let pairs = node
                .as_mapping()
                .ok_or_else(|| expected_kind(pattern, "mapping", node))?;
            for (key, value) in pairs {
                let k = key
                    .as_scalar()
                    .ok_or_else(|| expected_kind(pattern, "scalar", key))?;
                match k {
                    "ignore" => {
                        let items = value
                            .as_sequence()
                            .ok_or_else(|| expected_kind("ignore", "sequence", value))?;
                        ignore.reserve(items.len());
                        for item in items {
                            let p = item
                                .as_scalar()
                                .ok_or_else(|| expected_kind("ignore", "scalar", item))?;
                            let rule = RegexPattern::new(p).map_err(|source| {
                                ConfigError::InvalidRegex {
                                    pattern: p.to_string(),
                                    line: item.line,
                                    col: item.col,
                                    source,
                                }
                            })?;
                            ignore.push(Box::new(rule));
                        }
                    }
                    _ => {
                        return Err(ConfigError::UnexpectedKey {
                            key: k.to_string(),
                            line: key.line,
                            col: key.col,
                        });
                    }
                }
            }
        }
        Ok(Self { glob, ignore })
    }

    /// Whether this config is for the given `/`-separated path
    pub fn matches(&self, path: &str) -> bool {
        self.glob.matches(path)
    }

    /// Whether the given error message should be ignored due to the
    /// "ignore" configuration. Short-circuits on the first matching rule.
    pub fn ignores(&self, message: &str) -> bool {
        self.ignore.iter().any(|rule| rule.find(message))
    }
}

impl fmt::Debug for PathConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathConfig")
            .field("ignore_rules", &self.ignore.len())
            .finish_non_exhaustive()
    }
}

/// The "paths" mapping in the configuration file. The keys are glob
/// patterns matched against file paths relative to the repository root;
/// the values are the corresponding configurations.
#[derive(Debug, Default)]
pub struct PathConfigs {
    configs: HashMap<String, PathConfig>,
}

impl PathConfigs {
    /// Decode the whole "paths" mapping. All-or-nothing: the first invalid
    /// glob, duplicated key, or invalid entry aborts the table.
    fn decode(node: &Node) -> ConfigResult<Self> {
        let pairs = node
            .as_mapping()
            .ok_or_else(|| expected_kind("paths", "mapping", node))?;
        let mut configs = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            let pattern = key
                .as_scalar()
                .ok_or_else(|| expected_kind("paths", "scalar", key))?;
            let glob = GlobPattern::new(pattern).map_err(|source| ConfigError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            })?;
            if configs.contains_key(pattern) {
                return Err(ConfigError::DuplicateKey {
                    pattern: pattern.to_string(),
                });
            }
            let config = PathConfig::decode(pattern, Box::new(glob), value)?;
            configs.insert(pattern.to_string(), config);
        }
        Ok(Self { configs })
    }

    /// Look up the entry for an exact glob pattern key
    pub fn get(&self, pattern: &str) -> Option<&PathConfig> {
        self.configs.get(pattern)
    }

    /// All entries whose glob matches the given normalized path
    pub fn matching(&self, path: &str) -> Vec<&PathConfig> {
        self.configs.values().filter(|c| c.matches(path)).collect()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Root configuration, parsed from "actionlint.yaml" usually put in the
/// ".github" directory. Immutable after construction.
#[derive(Debug, Default)]
pub struct Config {
    /// Label names declared for self-hosted runners
    pub runner_labels: Vec<String>,
    /// Names of configuration variables used in the checked workflows.
    /// `None` disables the check entirely; `Some(vec![])` means no
    /// variable name is ever valid. The two must stay distinguishable.
    pub config_variables: Option<Vec<String>>,
    /// The "paths" mapping. See [`PathConfigs`].
    pub paths: PathConfigs,
}

impl Config {
    /// Decode a parsed document. `None` (an empty document) decodes as
    /// the default configuration.
    pub(crate) fn decode(root: Option<&Node>) -> ConfigResult<Self> {
        let mut config = Self::default();
        let root = match root {
            Some(node) if !node.is_null() => node,
            _ => return Ok(config),
        };
        let pairs = root
            .as_mapping()
            .ok_or_else(|| expected_kind("configuration", "mapping", root))?;
        for (key, value) in pairs {
            // Non-scalar keys cannot name a known field; skip them the way
            // a reflective decoder would.
            let Some(k) = key.as_scalar() else { continue };
            match k {
                "self-hosted-runner" => {
                    config.runner_labels = decode_runner_labels(value)?;
                }
                "config-variables" => {
                    config.config_variables = if value.is_null() {
                        None
                    } else {
                        Some(decode_string_sequence("config-variables", value)?)
                    };
                }
                "paths" => {
                    if !value.is_null() {
                        config.paths = PathConfigs::decode(value)?;
                    }
                }
                // Unrecognized top-level keys are ignored.
                _ => {}
            }
        }
        Ok(config)
    }

    /// Returns all [`PathConfig`] values matching the given file path.
    /// The path must be relative to the repository root; separators are
    /// normalized to `/` before matching. An error should be ignored when
    /// ANY returned entry ignores it.
    pub fn path_configs_for(&self, path: &Path) -> Vec<&PathConfig> {
        let normalized = normalize_path(path);
        self.paths.matching(&normalized)
    }
}

fn decode_runner_labels(node: &Node) -> ConfigResult<Vec<String>> {
    if node.is_null() {
        return Ok(Vec::new());
    }
    let pairs = node
        .as_mapping()
        .ok_or_else(|| expected_kind("self-hosted-runner", "mapping", node))?;
    for (key, value) in pairs {
        if key.as_scalar() == Some("labels") {
            return decode_string_sequence("labels", value);
        }
    }
    Ok(Vec::new())
}

/// Normalize platform path separators to `/` for glob matching
fn normalize_path(path: &Path) -> String {
    let path = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        path.into_owned()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
