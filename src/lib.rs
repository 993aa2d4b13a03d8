// SPDX-License-Identifier: PMPL-1.0-or-later

//! activity-names: display names for workout activity types.
//!
//! Every [`WorkoutActivityType`] has a canonical English name ([`name`]).
//! That name is also the key into translation catalogs: a [`Localizer`]
//! looks it up for the requested locale, walking from `de-AT` to `de`, and
//! returns the English name when no catalog has an entry. Missing
//! translations are never an error.
//!
//! ```
//! use activity_names::{name, Locale, WorkoutActivityType};
//!
//! let de = Locale::parse("de").unwrap();
//! assert_eq!(name(WorkoutActivityType::StairClimbing), "Stair Climbing");
//! assert_eq!(WorkoutActivityType::StairClimbing.localized_name(&de), "Treppensteigen");
//! assert_eq!(name(WorkoutActivityType::from_raw(9000)), "Other");
//! ```
//!
//! Catalogs are pluggable through [`LocaleCatalog`]. The crate bundles
//! German, Spanish, French and Japanese tables and can load String Catalog
//! (`.xcstrings`) files on top of them.

pub mod activity;
pub mod catalog;
pub mod config;
pub mod coverage;
pub mod locale;
pub mod localizer;
pub mod logging;
pub mod names;

pub use activity::{ParseActivityError, WorkoutActivityType};
pub use catalog::{
    BundledCatalog, EmptyCatalog, Layered, LocaleCatalog, MapCatalog, StringsFileCatalog,
};
pub use locale::{Locale, LocaleError};
pub use localizer::Localizer;
pub use names::name;
