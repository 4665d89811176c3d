//! Environment permission gate.
//!
//! The gate keeps synthetic smoke-test load away from a live backend: it
//! reads the `environment` key from the `global` section of a persisted
//! permissions file and only permits emission in `dev` and `test`
//! environments. This is a safety gate, not a feature toggle, and is
//! checked once per driver invocation before any event is emitted.
//!
//! Denial is an expected outcome, not an error: an unreadable file, a
//! missing key, or an unrecognized value all deny, with a remediation
//! diagnostic on the operational log channel.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default location of the persisted permissions file.
pub const DEFAULT_PERMISSIONS_PATH: &str = "/etc/metrics/permissions.yaml";

/// Recognized values of the `environment` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Test,
    Production,
}

impl Environment {
    /// Whether synthetic smoke-test events may be emitted in this
    /// environment.
    pub fn permits_synthetic_load(&self) -> bool {
        matches!(self, Environment::Dev | Environment::Test)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {s}")),
        }
    }
}

/// Shape of the permissions file: named sections, of which only `global`
/// is read here.
#[derive(Debug, Deserialize)]
struct PermissionsFile {
    global: GlobalSection,
}

#[derive(Debug, Deserialize)]
struct GlobalSection {
    environment: Option<String>,
}

/// Gate deciding whether synthetic events may be emitted.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    config_path: PathBuf,
}

impl PermissionGate {
    /// Create a gate reading the deployment's fixed permissions file.
    pub fn new() -> Self {
        Self::with_config_path(DEFAULT_PERMISSIONS_PATH)
    }

    /// Create a gate reading a specific permissions file.
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// The permissions file this gate reads.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Whether the configured environment permits synthetic events.
    ///
    /// Never fails: any problem determining the environment denies.
    pub fn is_permitted(&self) -> bool {
        let raw = match self.read_environment() {
            Some(raw) => raw,
            None => {
                self.warn_undetermined();
                return false;
            }
        };

        match raw.parse::<Environment>() {
            Ok(environment) if environment.permits_synthetic_load() => true,
            Ok(_) => {
                warn!(
                    "Environment is set to production. Smoke tests only run in dev or test \
                     environments; otherwise the production backend would be polluted with \
                     synthetic events. Switch the environment to dev or test and reboot \
                     before running smoke tests."
                );
                false
            }
            Err(_) => {
                self.warn_undetermined();
                false
            }
        }
    }

    fn read_environment(&self) -> Option<String> {
        let raw = match std::fs::read_to_string(&self.config_path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Could not load permissions file {}: {}",
                    self.config_path.display(),
                    e
                );
                return None;
            }
        };

        let file: PermissionsFile = match serde_yaml::from_str(&raw) {
            Ok(file) => file,
            Err(e) => {
                warn!(
                    "Could not parse permissions file {}: {}",
                    self.config_path.display(),
                    e
                );
                return None;
            }
        };

        file.global.environment
    }

    fn warn_undetermined(&self) {
        warn!(
            "Environment could not be determined. Smoke tests only run in dev or test \
             environments; otherwise a production backend would be polluted with synthetic \
             events. Ensure environment is set to dev or test in {}. Changes to that file \
             are only picked up after a reboot.",
            self.config_path.display()
        );
    }
}

impl Default for PermissionGate {
    fn default() -> Self {
        Self::new()
    }
}
