// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalogs.
//!
//! A catalog answers one question: is there a translation of this canonical
//! English name for exactly this locale? Walking from `de-AT` to `de` and
//! falling back to English is the [`Localizer`](crate::Localizer)'s job, so
//! implementations stay simple lookups.
//!
//! Shipped implementations:
//!
//! | Type | Source |
//! |------|--------|
//! | [`BundledCatalog`] | tables compiled into the crate (de, es, fr, ja) |
//! | [`StringsFileCatalog`] | String Catalog JSON (`.xcstrings`) files |
//! | [`MapCatalog`] | entries inserted at runtime |
//! | [`EmptyCatalog`] | nothing; everything stays English |
//!
//! [`Layered`] stacks two catalogs so user files can override the bundled
//! tables.

mod bundled;
mod strings_file;

pub use bundled::BundledCatalog;
pub use strings_file::StringsFileCatalog;

use crate::locale::Locale;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only translation source keyed by (canonical name, locale).
pub trait LocaleCatalog {
    /// Translation of `key` for exactly `locale`, or `None` when the catalog
    /// has none. A missing entry is normal, not an error.
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str>;

    /// Locales this catalog has entries for. Used for coverage reports; an
    /// empty list means "unknown", not "no translations".
    fn locales(&self) -> Vec<Locale> {
        Vec::new()
    }
}

impl<C: LocaleCatalog + ?Sized> LocaleCatalog for &C {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        (**self).lookup(key, locale)
    }

    fn locales(&self) -> Vec<Locale> {
        (**self).locales()
    }
}

impl<C: LocaleCatalog + ?Sized> LocaleCatalog for Box<C> {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        (**self).lookup(key, locale)
    }

    fn locales(&self) -> Vec<Locale> {
        (**self).locales()
    }
}

impl<C: LocaleCatalog + ?Sized> LocaleCatalog for Arc<C> {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        (**self).lookup(key, locale)
    }

    fn locales(&self) -> Vec<Locale> {
        (**self).locales()
    }
}

/// A stack of catalogs; the first one with an entry wins.
impl<C: LocaleCatalog> LocaleCatalog for Vec<C> {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        self.iter().find_map(|catalog| catalog.lookup(key, locale))
    }

    fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = Vec::new();
        for locale in self.iter().flat_map(LocaleCatalog::locales) {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    }
}

/// Catalog with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl LocaleCatalog for EmptyCatalog {
    fn lookup(&self, _key: &str, _locale: &Locale) -> Option<&str> {
        None
    }
}

/// Two catalogs consulted in order: `primary` wins where both have an entry.
#[derive(Debug, Clone, Default)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    /// Consult `primary` first, then `fallback`.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: LocaleCatalog, F: LocaleCatalog> LocaleCatalog for Layered<P, F> {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        self.primary
            .lookup(key, locale)
            .or_else(|| self.fallback.lookup(key, locale))
    }

    fn locales(&self) -> Vec<Locale> {
        let mut locales = self.primary.locales();
        for locale in self.fallback.locales() {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    }
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    entries: HashMap<Locale, HashMap<String, String>>,
}

impl MapCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the translation of `key` for exactly `locale`.
    /// Returns `self` so inserts can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_names::{Locale, LocaleCatalog, MapCatalog};
    ///
    /// let de_ch = Locale::parse("de-CH").unwrap();
    /// let mut catalog = MapCatalog::new();
    /// catalog.insert(de_ch.clone(), "Soccer", "Fussball");
    /// assert_eq!(catalog.lookup("Soccer", &de_ch), Some("Fussball"));
    /// assert_eq!(catalog.lookup("Soccer", &Locale::parse("de").unwrap()), None);
    /// ```
    pub fn insert(
        &mut self,
        locale: Locale,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.entries
            .entry(locale)
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// True when no locale has any entry.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}

impl LocaleCatalog for MapCatalog {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        self.entries
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.entries.keys().cloned().collect();
        locales.sort_by_key(ToString::to_string);
        locales
    }
}
