//! Run configuration loaded from TOML
//!
//! ```toml
//! [filter]
//! ignore_names = [".", "..", "$FAT1", "$FAT2"]
//!
//! [diff]
//! protected_attributes = ["md5", "sha1", "ctime", "mtime"]
//! ignored_attributes = ["atime"]
//!
//! [logging]
//! profile = "production"
//! ```
//!
//! Every section is optional; omitted lists keep the built-in defaults.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use dfxdelta_core::logging_facility::Profile;
use dfxdelta_core::ReconcileOptions;
use serde::Deserialize;

use crate::errors::{config_error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeltaConfig {
    pub filter: FilterConfig,
    pub diff: DiffConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Replaces the default ignore list when present
    pub ignore_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Replaces the default protected set when present
    pub protected_attributes: Option<Vec<String>>,
    pub ignored_attributes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Option<String>,
}

impl DeltaConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the file is unreadable, is not valid TOML, has
    /// unknown keys, or names an unknown logging profile.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            config_error(&format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on TOML errors, unknown keys, or an unknown profile.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| config_error(&format!("TOML parse error: {}", e)))?;
        config.logging_profile()?;
        Ok(config)
    }

    /// Reconciliation options with configured overrides applied
    pub fn to_options(&self) -> ReconcileOptions {
        let mut options = ReconcileOptions::default();
        if let Some(names) = &self.filter.ignore_names {
            options.ignore_names = names.iter().cloned().collect();
        }
        if let Some(protected) = &self.diff.protected_attributes {
            options.protected_attributes = protected.iter().cloned().collect();
        }
        options.ignored_attributes = self
            .diff
            .ignored_attributes
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>();
        options
    }

    /// Configured logging profile, if any.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for a name other than `development` or `production`.
    pub fn logging_profile(&self) -> Result<Option<Profile>> {
        match self.logging.profile.as_deref() {
            None => Ok(None),
            Some(name) => match Profile::from_name(name) {
                Some(profile @ (Profile::Development | Profile::Production)) => Ok(Some(profile)),
                _ => Err(config_error(&format!("unknown logging profile '{}'", name))),
            },
        }
    }
}
