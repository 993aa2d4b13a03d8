// SPDX-License-Identifier: PMPL-1.0-or-later

//! String Catalog files.
//!
//! Reads the JSON layout used by `.xcstrings` resource bundles:
//!
//! ```json
//! {
//!   "sourceLanguage": "en",
//!   "strings": {
//!     "Stair Climbing": {
//!       "localizations": {
//!         "de": { "stringUnit": { "state": "translated", "value": "Treppensteigen" } }
//!       }
//!     }
//!   },
//!   "version": "1.0"
//! }
//! ```
//!
//! Only units in the `translated` state are loaded. `new`, `needs_review` and
//! empty values behave as missing, so lookups fall back to English rather than
//! showing a half-finished translation. Plural and device variations are not
//! read.

use super::{LocaleCatalog, MapCatalog};
use crate::locale::Locale;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const TRANSLATED: &str = "translated";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StringCatalogDocument {
    #[serde(default)]
    source_language: Option<String>,
    #[serde(default)]
    strings: HashMap<String, StringEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct StringEntry {
    #[serde(default)]
    localizations: HashMap<String, Localization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Localization {
    string_unit: Option<StringUnit>,
}

#[derive(Debug, Deserialize)]
struct StringUnit {
    #[serde(default)]
    state: Option<String>,
    value: String,
}

/// Translations loaded from a String Catalog document.
#[derive(Debug, Clone, Default)]
pub struct StringsFileCatalog {
    source_language: Option<Locale>,
    entries: MapCatalog,
    translations: usize,
}

impl StringsFileCatalog {
    /// Parse a String Catalog document.
    ///
    /// Malformed JSON or an invalid `sourceLanguage` is an error. Units with
    /// an unparseable locale tag are skipped and logged at debug level.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_names::{Locale, LocaleCatalog, StringsFileCatalog};
    ///
    /// let json = r#"{"strings": {"Running": {"localizations": {
    ///     "it": {"stringUnit": {"state": "translated", "value": "Corsa"}}
    /// }}}}"#;
    /// let catalog = StringsFileCatalog::from_json_str(json).unwrap();
    /// assert_eq!(catalog.lookup("Running", &Locale::parse("it").unwrap()), Some("Corsa"));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: StringCatalogDocument =
            serde_json::from_str(json).context("invalid string catalog JSON")?;

        let source_language = match document.source_language.as_deref() {
            Some(tag) => Some(
                Locale::parse(tag)
                    .with_context(|| format!("invalid sourceLanguage '{tag}'"))?,
            ),
            None => None,
        };

        let mut entries = MapCatalog::new();
        let mut translations = 0;
        let mut skipped = 0;
        for (key, entry) in document.strings {
            for (tag, localization) in entry.localizations {
                let Some(unit) = localization.string_unit else {
                    skipped += 1;
                    continue;
                };
                let translated = unit.state.as_deref().map_or(true, |s| s == TRANSLATED);
                if !translated || unit.value.is_empty() {
                    skipped += 1;
                    continue;
                }
                match Locale::parse(&tag) {
                    Ok(locale) => {
                        entries.insert(locale, key.clone(), unit.value);
                        translations += 1;
                    }
                    Err(err) => {
                        tracing::debug!(locale = %tag, key = %key, error = %err, "skipping localization with unusable locale");
                        skipped += 1;
                    }
                }
            }
        }
        tracing::debug!(translations, skipped, "loaded string catalog");

        Ok(Self {
            source_language,
            entries,
            translations,
        })
    }

    /// Read and parse a `.xcstrings` file. Errors name the path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read string catalog {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("failed to load string catalog {}", path.display()))
    }

    /// The document's `sourceLanguage`, if it declared one.
    pub fn source_language(&self) -> Option<&Locale> {
        self.source_language.as_ref()
    }

    /// Number of usable translations loaded.
    pub fn len(&self) -> usize {
        self.translations
    }

    /// True when no usable translation was loaded.
    pub fn is_empty(&self) -> bool {
        self.translations == 0
    }
}

impl LocaleCatalog for StringsFileCatalog {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        self.entries.lookup(key, locale)
    }

    fn locales(&self) -> Vec<Locale> {
        self.entries.locales()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "sourceLanguage": "en",
        "strings": {
            "Stair Climbing": {
                "localizations": {
                    "de": { "stringUnit": { "state": "translated", "value": "Treppensteigen" } },
                    "it": { "stringUnit": { "state": "needs_review", "value": "Salire le scale" } }
                }
            },
            "Running": {
                "localizations": {
                    "pt-BR": { "stringUnit": { "state": "translated", "value": "Corrida" } },
                    "nl": { "stringUnit": { "state": "translated", "value": "" } },
                    "fr": { "variations": { "plural": {} } }
                }
            },
            "Hockey": {}
        },
        "version": "1.0"
    }"#;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a subscriber capped at `level` and return what it wrote.
    fn capture_logs(level: tracing::Level, f: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn loads_translated_units() {
        let catalog = StringsFileCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.source_language(), Some(&Locale::english()));
        assert_eq!(
            catalog.lookup("Stair Climbing", &locale("de")),
            Some("Treppensteigen")
        );
        assert_eq!(catalog.lookup("Running", &locale("pt-BR")), Some("Corrida"));
    }

    #[test]
    fn ignores_unfinished_units() {
        let catalog = StringsFileCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.lookup("Stair Climbing", &locale("it")), None);
        assert_eq!(catalog.lookup("Running", &locale("nl")), None);
        assert_eq!(catalog.lookup("Running", &locale("fr")), None);
        assert_eq!(catalog.lookup("Hockey", &locale("de")), None);
    }

    #[test]
    fn reports_locales_with_entries() {
        let catalog = StringsFileCatalog::from_json_str(SAMPLE).unwrap();
        let locales: Vec<String> = catalog.locales().iter().map(ToString::to_string).collect();
        assert_eq!(locales, ["de", "pt-BR"]);
    }

    #[test]
    fn minimal_document_is_empty() {
        let catalog = StringsFileCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.source_language(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = StringsFileCatalog::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().contains("invalid string catalog JSON"));
    }

    #[test]
    fn unusable_locale_tags_stay_below_info() {
        let logs = capture_logs(tracing::Level::INFO, || {
            let catalog = StringsFileCatalog::from_json_str(
                r#"{"strings": {"Running": {"localizations": {
                    "zz": {"stringUnit": {"state": "translated", "value": "?"}},
                    "de": {"stringUnit": {"state": "translated", "value": "Laufen"}}
                }}}}"#,
            )
            .unwrap();
            assert_eq!(catalog.len(), 1);
        });
        assert!(logs.is_empty(), "unexpected log output: {logs}");

        let logs = capture_logs(tracing::Level::DEBUG, || {
            StringsFileCatalog::from_json_str(
                r#"{"strings": {"Running": {"localizations": {
                    "zz": {"stringUnit": {"state": "translated", "value": "?"}}
                }}}}"#,
            )
            .unwrap();
        });
        assert!(logs.contains("skipping localization"), "{logs}");
    }

    #[test]
    fn reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = StringsFileCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = StringsFileCatalog::from_path(Path::new("/nonexistent/Localizable.xcstrings"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/Localizable.xcstrings"));
    }
}
