// SPDX-License-Identifier: PMPL-1.0-or-later

//! CLI configuration.
//!
//! ```yaml
//! # activity-names.yaml
//! locale: de-AT
//! catalogs:
//!   - translations/Localizable.xcstrings
//! ```
//!
//! Relative catalog paths resolve against the directory holding the config
//! file. Locale precedence: `--locale`, then `ACTIVITY_NAMES_LOCALE`, then
//! the config file, then the ambient locale.

use crate::catalog::StringsFileCatalog;
use crate::locale::Locale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the display locale.
pub const LOCALE_ENV: &str = "ACTIVITY_NAMES_LOCALE";

/// Settings read from `activity-names.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Display locale, e.g. `de-AT`.
    pub locale: Option<Locale>,
    /// String Catalog files, highest priority first.
    pub catalogs: Vec<PathBuf>,
}

impl Config {
    /// Parse YAML. Blank input yields the default config.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_names::config::Config;
    /// use activity_names::Locale;
    ///
    /// let config = Config::from_yaml_str("locale: fr_CA\n").unwrap();
    /// assert_eq!(config.locale, Some(Locale::parse("fr-CA").unwrap()));
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("invalid configuration")
    }

    /// Read a config file, resolving relative catalog paths against its
    /// directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::from_yaml_str(&yaml)
            .with_context(|| format!("failed to load config {}", path.display()))?;

        if let Some(base) = path.parent() {
            for catalog in &mut config.catalogs {
                if catalog.is_relative() {
                    *catalog = base.join(&*catalog);
                }
            }
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Pick the display locale. `env` stands in for `std::env::var`.
    pub fn resolve_locale<F>(&self, cli: Option<Locale>, env: F) -> Result<Locale>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = cli {
            return Ok(locale);
        }
        if let Some(value) = env(LOCALE_ENV).filter(|v| !v.trim().is_empty()) {
            return Locale::parse(&value)
                .with_context(|| format!("invalid {LOCALE_ENV} value '{value}'"));
        }
        if let Some(locale) = &self.locale {
            return Ok(locale.clone());
        }
        Ok(Locale::from_env_with(env))
    }
}

/// Load String Catalog files in priority order.
pub fn load_catalogs(paths: &[PathBuf]) -> Result<Vec<StringsFileCatalog>> {
    paths
        .iter()
        .map(|path| {
            let catalog = StringsFileCatalog::from_path(path)?;
            tracing::debug!(path = %path.display(), translations = catalog.len(), "loaded string catalog");
            Ok(catalog)
        })
        .collect()
}
