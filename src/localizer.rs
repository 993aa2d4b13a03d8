// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized activity names.
//!
//! ```
//! use activity_names::{Locale, Localizer, WorkoutActivityType};
//!
//! let localizer = Localizer::new(Locale::parse("de").unwrap());
//! assert_eq!(localizer.localized_name(WorkoutActivityType::StairClimbing), "Treppensteigen");
//! assert_eq!(localizer.name(WorkoutActivityType::Running), "Running");
//! ```

use crate::activity::WorkoutActivityType;
use crate::catalog::{BundledCatalog, LocaleCatalog};
use crate::locale::Locale;
use crate::names;

/// Resolves display names for one locale against one catalog.
///
/// The locale's fallback chain is computed when the locale is set, so
/// lookups borrow from the catalog and allocate nothing.
#[derive(Debug, Clone)]
pub struct Localizer<C = BundledCatalog> {
    locale: Locale,
    chain: Vec<Locale>,
    catalog: C,
}

impl Localizer<BundledCatalog> {
    /// Localizer backed by the bundled translations.
    pub fn new(locale: Locale) -> Self {
        Self::with_catalog(locale, BundledCatalog)
    }

    /// Localizer for the ambient locale (see [`Locale::current`]).
    pub fn current() -> Self {
        Self::new(Locale::current())
    }
}

impl Default for Localizer<BundledCatalog> {
    fn default() -> Self {
        Self::current()
    }
}

impl<C: LocaleCatalog> Localizer<C> {
    /// Localizer backed by any [`LocaleCatalog`], e.g. a String Catalog file
    /// layered over the bundled tables, or a fake in tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_names::{EmptyCatalog, Locale, Localizer, WorkoutActivityType};
    ///
    /// let localizer = Localizer::with_catalog(Locale::parse("de").unwrap(), EmptyCatalog);
    /// assert_eq!(localizer.localized_name(WorkoutActivityType::Running), "Running");
    /// ```
    pub fn with_catalog(locale: Locale, catalog: C) -> Self {
        let chain = locale.fallback_chain();
        Self {
            locale,
            chain,
            catalog,
        }
    }

    /// The locale names are resolved for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Locales tried in order by [`Localizer::translate`].
    pub fn fallback_chain(&self) -> &[Locale] {
        &self.chain
    }

    /// Switch to another locale, keeping the catalog.
    pub fn set_locale(&mut self, locale: Locale) {
        self.chain = locale.fallback_chain();
        self.locale = locale;
    }

    /// The catalog translations come from.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// English display name. Ignores the localizer's locale.
    pub fn name(&self, activity: WorkoutActivityType) -> &'static str {
        names::name(activity)
    }

    /// Display name in the localizer's locale, or the English name when no
    /// catalog entry exists for any form of the locale.
    pub fn localized_name(&self, activity: WorkoutActivityType) -> &str {
        let canonical = names::name(activity);
        self.translate(canonical).unwrap_or(canonical)
    }

    /// Translation of a canonical name, walking the locale's fallback chain.
    /// `None` means the caller should show the canonical name.
    pub fn translate(&self, canonical: &str) -> Option<&str> {
        let found = self
            .chain
            .iter()
            .find_map(|candidate| self.catalog.lookup(canonical, candidate));
        if found.is_none() {
            tracing::trace!(key = canonical, locale = %self.locale, "no translation, using canonical name");
        }
        found
    }
}

impl WorkoutActivityType {
    /// Name in `locale` from the bundled translations, English otherwise.
    ///
    /// Bundled tables are language-level, so only the language of `locale`
    /// is consulted; `de-AT` and `de` give the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_names::{Locale, WorkoutActivityType};
    ///
    /// let de_at = Locale::parse("de-AT").unwrap();
    /// assert_eq!(WorkoutActivityType::StairClimbing.localized_name(&de_at), "Treppensteigen");
    /// ```
    pub fn localized_name(self, locale: &Locale) -> &'static str {
        let canonical = names::name(self);
        BundledCatalog::translate_language(canonical, locale.language()).unwrap_or(canonical)
    }

    /// [`WorkoutActivityType::localized_name`] for the ambient locale.
    pub fn localized_name_current(self) -> &'static str {
        self.localized_name(&Locale::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EmptyCatalog, LocaleCatalog, MapCatalog};

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[test]
    fn english_is_canonical() {
        let localizer = Localizer::new(Locale::english());
        for activity in WorkoutActivityType::ALL {
            assert_eq!(localizer.localized_name(*activity), localizer.name(*activity));
        }
    }

    #[test]
    fn german_stair_climbing() {
        let localizer = Localizer::new(locale("de"));
        assert_eq!(
            localizer.localized_name(WorkoutActivityType::StairClimbing),
            "Treppensteigen"
        );
    }

    #[test]
    fn regional_locale_uses_language_table() {
        let localizer = Localizer::new(locale("de-AT"));
        assert_eq!(
            localizer.localized_name(WorkoutActivityType::StairClimbing),
            "Treppensteigen"
        );
    }

    #[test]
    fn regional_entry_beats_language_entry() {
        let mut catalog = MapCatalog::new();
        catalog
            .insert(locale("de"), "Soccer", "Fußball")
            .insert(locale("de-CH"), "Soccer", "Fussball");

        let swiss = Localizer::with_catalog(locale("de-CH"), &catalog);
        let austrian = Localizer::with_catalog(locale("de-AT"), &catalog);
        assert_eq!(swiss.localized_name(WorkoutActivityType::Soccer), "Fussball");
        assert_eq!(austrian.localized_name(WorkoutActivityType::Soccer), "Fußball");
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        let localizer = Localizer::with_catalog(locale("de"), EmptyCatalog);
        for activity in WorkoutActivityType::ALL {
            assert_eq!(localizer.localized_name(*activity), activity.name());
        }
        assert_eq!(localizer.translate("Stair Climbing"), None);
    }

    #[test]
    fn unrecognized_activity_localizes_other() {
        let localizer = Localizer::new(locale("de"));
        assert_eq!(
            localizer.localized_name(WorkoutActivityType::Unrecognized(99)),
            "Sonstiges"
        );
        assert_eq!(
            Localizer::new(Locale::english()).localized_name(WorkoutActivityType::Unrecognized(99)),
            "Other"
        );
    }

    #[test]
    fn set_locale_switches_language() {
        let mut localizer = Localizer::new(locale("fr"));
        assert_eq!(localizer.localized_name(WorkoutActivityType::Swimming), "Natation");
        localizer.set_locale(locale("es"));
        assert_eq!(localizer.locale(), &locale("es"));
        assert_eq!(localizer.localized_name(WorkoutActivityType::Swimming), "Natación");
    }

    #[test]
    fn fallback_chain_is_computed_per_locale() {
        let mut localizer = Localizer::new(locale("zh-Hant-TW"));
        assert_eq!(
            localizer.fallback_chain(),
            [locale("zh-Hant-TW"), locale("zh-Hant"), locale("zh")]
        );

        localizer.set_locale(locale("de-AT"));
        assert_eq!(localizer.fallback_chain(), [locale("de-AT"), locale("de")]);
        assert_eq!(
            localizer.localized_name(WorkoutActivityType::StairClimbing),
            "Treppensteigen"
        );
    }

    #[test]
    fn translations_borrow_from_the_catalog() {
        let mut catalog = MapCatalog::new();
        catalog.insert(locale("de"), "Soccer", "Fußball");
        let localizer = Localizer::with_catalog(locale("de-AT"), &catalog);

        let translated = localizer.localized_name(WorkoutActivityType::Soccer);
        let stored = catalog.lookup("Soccer", &locale("de")).unwrap();
        assert!(std::ptr::eq(translated, stored));
    }

    #[test]
    fn extension_method_matches_localizer() {
        for tag in ["en", "de", "de-AT", "es", "fr", "ja", "it"] {
            let localizer = Localizer::new(locale(tag));
            for activity in WorkoutActivityType::ALL {
                assert_eq!(
                    activity.localized_name(&locale(tag)),
                    localizer.localized_name(*activity),
                    "{tag} / {activity:?}"
                );
            }
        }
    }
}
