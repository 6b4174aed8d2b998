//! Configuration file resolution.
//!
//! Two entry points: [`read_config_file`] loads an explicitly given file,
//! and [`load_repo_config`] probes the fixed candidate locations under a
//! repository's `.github` directory. A missing file during discovery is
//! not an error; it means "no configuration present".

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use crate::yaml;

/// Candidate file names probed by [`load_repo_config`], in priority order
const CONFIG_FILE_NAMES: &[&str] = &["actionlint.yaml", "actionlint.yml"];

/// Subdirectory of the repository root holding the configuration file
const CONFIG_DIR: &str = ".github";

/// Default configuration file content written by
/// [`write_default_config_file`]
const DEFAULT_CONFIG: &str = r#"self-hosted-runner:
  # Labels of self-hosted runner in array of strings.
  labels: []

# Configuration variables in array of strings defined in your repository or
# organization. `null` means disabling configuration variables check.
# Empty array means no configuration variable is allowed.
config-variables: null

# Configuration for file paths. The keys are glob patterns to match to file
# paths relative to the repository root. The values are the configurations for
# the file paths. The following configurations are available.
#
# "ignore" is an array of regular expression patterns. Matched error messages
# are ignored. This is similar to the "-ignore" command line option.
paths:
#  .github/workflows/**/*.yml:
#    ignore: []
"#;

/// Parse configuration file content. Any failure is wrapped with the file
/// path so the final message names both the root cause and the file.
pub fn parse_config(source: &str, path: &Path) -> ConfigResult<Config> {
    yaml::parse(source)
        .and_then(|root| Config::decode(root.as_ref()))
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
}

/// Read the configuration file at the given path.
pub fn read_config_file(path: &Path) -> ConfigResult<Config> {
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&source, path)
}

/// Read the repository's configuration from `.github/actionlint.yaml` or
/// `.github/actionlint.yml`, first existing file wins.
///
/// Returns `Ok(None)` when neither exists. A present-but-invalid file is
/// an error; a missing one is not.
pub fn load_repo_config(root: &Path) -> ConfigResult<Option<Config>> {
    for name in CONFIG_FILE_NAMES {
        let path = root.join(CONFIG_DIR).join(name);
        if path.is_file() {
            return read_config_file(&path).map(Some);
        }
    }
    Ok(None)
}

/// Write the commented default configuration file to the given path with
/// 0644 permissions.
pub fn write_default_config_file(path: &Path) -> ConfigResult<()> {
    fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(|source| {
            ConfigError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }
    Ok(())
}
