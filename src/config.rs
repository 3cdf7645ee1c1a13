//! Configuration constants and profile loading for countryline
//!
//! A profile is one section of an INI file:
//!
//! ```ini
//! [default]
//! server = http://localhost:8080
//! timeout_secs = 30
//! discard_stale = false
//! ```

use crate::cmd_args::CommandLineArgs;
use crate::repl::view_models::ResponsePolicy;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default profile file path for countryline
pub const DEFAULT_PROFILE_PATH: &str = "~/.countryline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "COUNTRYLINE_PROFILE_PATH";

/// Base URL used when neither the profile nor the command line names one
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Setting this enables file logging at the given filter level
pub const LOG_LEVEL_ENV_VAR: &str = "COUNTRYLINE_LOG_LEVEL";

pub const LOG_FILE_ENV_VAR: &str = "COUNTRYLINE_LOG_FILE";

pub const DEFAULT_LOG_FILE_NAME: &str = "countryline.log";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Log file location; the terminal itself is taken by the UI
pub fn get_log_file_path() -> PathBuf {
    std::env::var_os(LOG_FILE_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME))
}

/// Connection settings for the country service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProfile {
    server: String,
    timeout: Duration,
    discard_stale: bool,
}

impl Default for ServiceProfile {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            discard_stale: false,
        }
    }
}

impl ServiceProfile {
    /// Read `profile_name` from the INI file at `profile_path`
    ///
    /// A missing file or section gives the default profile; a file that
    /// exists but cannot be parsed is an error.
    pub fn load(profile_name: &str, profile_path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(profile_path).to_string();
        let path = Path::new(&expanded);

        if !path.exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", expanded);
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read profile file '{expanded}'"))?;

        let Some(section) = ini.section(Some(profile_name)) else {
            tracing::debug!("Profile '{}' not found, using defaults", profile_name);
            return Ok(Self::default());
        };

        let mut profile = Self::default();
        if let Some(server) = section.get("server").filter(|s| !s.trim().is_empty()) {
            profile.server = server.trim().to_string();
        }
        if let Some(timeout) = section.get("timeout_secs") {
            let secs: u64 = timeout.trim().parse().with_context(|| {
                format!("Invalid timeout_secs '{timeout}' in profile '{profile_name}'")
            })?;
            profile.timeout = Duration::from_secs(secs);
        }
        if let Some(flag) = section.get("discard_stale") {
            profile.discard_stale = parse_flag(flag).with_context(|| {
                format!("Invalid discard_stale '{flag}' in profile '{profile_name}'")
            })?;
        }

        tracing::debug!("Profile '{}' loaded: {:?}", profile_name, profile);
        Ok(profile)
    }

    /// Command line values win over the profile
    pub fn apply_args(mut self, args: &CommandLineArgs) -> Self {
        if let Some(server) = args.server() {
            self.server = server.to_string();
        }
        self.discard_stale |= args.discard_stale();
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn discard_stale(&self) -> bool {
        self.discard_stale
    }

    pub fn response_policy(&self) -> ResponsePolicy {
        if self.discard_stale {
            ResponsePolicy::DiscardSuperseded
        } else {
            ResponsePolicy::LastWriterWins
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => anyhow::bail!("expected true or false, got '{other}'"),
    }
}
