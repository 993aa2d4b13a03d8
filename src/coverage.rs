// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation coverage reports.
//!
//! For each locale a catalog knows about, list the activities that would
//! still be shown in English.

use crate::activity::WorkoutActivityType;
use crate::catalog::LocaleCatalog;
use crate::locale::Locale;
use crate::localizer::Localizer;
use serde::Serialize;

/// One locale's row in a coverage report. Serializes to the JSON printed
/// by `check --format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
    pub locale: Locale,
    /// Activities with a translation somewhere on the fallback chain.
    pub translated: usize,
    /// Canonical names without a translation, in raw-value order.
    pub missing: Vec<&'static str>,
}

impl LocaleCoverage {
    /// True when every activity is translated.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Coverage of every locale reported by `catalog.locales()`.
pub fn coverage<C: LocaleCatalog>(catalog: &C) -> Vec<LocaleCoverage> {
    catalog
        .locales()
        .into_iter()
        .map(|locale| coverage_for(catalog, locale))
        .collect()
}

/// Coverage of one locale, following the same fallback chain as lookups.
pub fn coverage_for<C: LocaleCatalog>(catalog: &C, locale: Locale) -> LocaleCoverage {
    let localizer = Localizer::with_catalog(locale, catalog);
    let missing: Vec<&'static str> = WorkoutActivityType::ALL
        .iter()
        .map(|activity| activity.name())
        .filter(|canonical| localizer.translate(canonical).is_none())
        .collect();

    LocaleCoverage {
        translated: WorkoutActivityType::ALL.len() - missing.len(),
        locale: localizer.locale().clone(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundledCatalog, MapCatalog};

    #[test]
    fn bundled_tables_are_complete() {
        let report = coverage(&BundledCatalog);
        assert_eq!(report.len(), 4);
        for entry in &report {
            assert!(entry.is_complete(), "{} is missing {:?}", entry.locale, entry.missing);
            assert_eq!(entry.translated, WorkoutActivityType::ALL.len());
        }
    }

    #[test]
    fn partial_catalog_lists_gaps() {
        let italian = Locale::parse("it").unwrap();
        let mut catalog = MapCatalog::new();
        catalog.insert(italian.clone(), "Running", "Corsa");

        let report = coverage(&catalog);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].locale, italian);
        assert_eq!(report[0].translated, 1);
        assert!(!report[0].missing.contains(&"Running"));
        assert!(report[0].missing.contains(&"Stair Climbing"));
        assert_eq!(report[0].missing[0], "American Football");
    }

    #[test]
    fn regional_locale_counts_language_entries() {
        let report = coverage_for(&BundledCatalog, Locale::parse("fr-CA").unwrap());
        assert!(report.is_complete());
    }
}
