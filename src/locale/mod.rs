// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers.
//!
//! A [`Locale`] is a language, optionally narrowed by script and region.
//! Parsing accepts BCP 47 style tags (`de-AT`, `zh-Hant-TW`) as well as the
//! POSIX names found in `LANG` (`de_DE.UTF-8`, `sr_RS@latin`). Lookups walk
//! [`Locale::fallback_chain`] from most to least specific.

mod iso639;

pub use iso639::{is_valid_iso639_1, language_name, native_name};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variables consulted by [`Locale::current`], highest priority
/// first.
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Why a locale identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// Blank input, or nothing left after stripping `.UTF-8`/`@modifier`.
    #[error("empty locale identifier")]
    Empty,
    /// First subtag is not a two-letter ISO 639-1 code.
    #[error("'{0}' is not an ISO 639-1 language code")]
    InvalidLanguage(String),
    /// A later subtag is neither a script nor a region, or is out of order.
    #[error("unexpected locale subtag '{0}'")]
    InvalidSubtag(String),
}

/// A language with optional script and region, e.g. `de`, `pt-BR`,
/// `zh-Hant-TW`. Always held in canonical case; serializes as its tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// Parse a BCP 47 tag or POSIX locale name. `-` and `_` both separate
    /// subtags; encoding and modifier suffixes are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_names::{Locale, LocaleError};
    ///
    /// let locale = Locale::parse("zh_hant_tw.UTF-8").unwrap();
    /// assert_eq!(locale.to_string(), "zh-Hant-TW");
    /// assert_eq!(Locale::parse("xx"), Err(LocaleError::InvalidLanguage("xx".into())));
    /// ```
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        // Drop POSIX encoding and modifier suffixes: de_DE.UTF-8, sr_RS@latin
        let base = tag
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        if base.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut subtags = base.split(['-', '_']);
        let first = subtags.next().unwrap_or_default();
        let language = first.to_ascii_lowercase();
        if !is_valid_iso639_1(&language) {
            return Err(LocaleError::InvalidLanguage(first.to_string()));
        }

        let mut script = None;
        let mut region = None;
        for subtag in subtags {
            let alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let digits = subtag.chars().all(|c| c.is_ascii_digit());
            match subtag.len() {
                4 if alpha && script.is_none() && region.is_none() => {
                    script = Some(title_case(subtag));
                }
                2 if alpha && region.is_none() => {
                    region = Some(subtag.to_ascii_uppercase());
                }
                3 if digits && region.is_none() => {
                    region = Some(subtag.to_string());
                }
                _ => return Err(LocaleError::InvalidSubtag(subtag.to_string())),
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// `en`, the language canonical names are written in.
    pub fn english() -> Self {
        Self::language_only("en")
    }

    /// The caller's ambient locale, taken from `LC_ALL`, `LC_MESSAGES` or
    /// `LANG`. Falls back to English; never fails.
    pub fn current() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// [`Locale::current`] with an injectable environment.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for var in LOCALE_ENV_VARS {
            let Some(value) = lookup(var) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() || value == "C" || value == "POSIX" {
                continue;
            }
            match Self::parse(value) {
                Ok(locale) => {
                    tracing::debug!(%locale, source = var, "resolved ambient locale");
                    return locale;
                }
                Err(err) => {
                    tracing::debug!(value, source = var, error = %err, "ignoring locale variable");
                }
            }
        }
        Self::english()
    }

    /// Lowercase ISO 639-1 code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Title-case ISO 15924 script, e.g. `Hant`.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Uppercase country code or UN M.49 number.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// This locale followed by each less specific form: `zh-Hant-TW`,
    /// `zh-Hant`, `zh`.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = vec![self.clone()];
        if self.script.is_some() && self.region.is_some() {
            chain.push(Self {
                language: self.language.clone(),
                script: self.script.clone(),
                region: None,
            });
        }
        if self.script.is_some() || self.region.is_some() {
            chain.push(Self::language_only(&self.language));
        }
        chain
    }

    fn language_only(language: &str) -> Self {
        Self {
            language: language.to_string(),
            script: None,
            region: None,
        }
    }
}

fn title_case(subtag: &str) -> String {
    let lower = subtag.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
