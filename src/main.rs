// SPDX-License-Identifier: PMPL-1.0-or-later

//! activity-names: look up display names for workout activity types
//!
//! Names come from the bundled translation tables, optionally overridden by
//! String Catalog files given with `--catalog` or listed in a config file.

use activity_names::catalog::{BundledCatalog, Layered, LocaleCatalog, StringsFileCatalog};
use activity_names::config::{self, Config};
use activity_names::coverage::{self, LocaleCoverage};
use activity_names::locale::{language_name, native_name};
use activity_names::{logging, Locale, Localizer, WorkoutActivityType};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

type CliCatalog = Layered<Vec<StringsFileCatalog>, BundledCatalog>;

#[derive(Parser)]
#[command(name = "activity-names")]
#[command(version)]
#[command(about = "Display names for workout activity types, in any bundled or supplied language")]
#[command(long_about = None)]
struct Cli {
    /// Display locale, e.g. `de` or `de-AT` (default: ACTIVITY_NAMES_LOCALE, config, then LANG)
    #[arg(short, long, global = true, value_name = "TAG")]
    locale: Option<Locale>,

    /// String Catalog (.xcstrings) file layered over the bundled translations; repeatable
    #[arg(long = "catalog", global = true, value_name = "PATH")]
    catalogs: Vec<PathBuf>,

    /// YAML config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical English name of an activity
    Name {
        /// Identifier (`stairClimbing`, `stair_climbing`) or raw value (`44`)
        #[arg(value_name = "ACTIVITY")]
        activity: WorkoutActivityType,
    },

    /// Print the localized name of an activity
    Localize {
        /// Identifier (`stairClimbing`, `stair_climbing`) or raw value (`44`)
        #[arg(value_name = "ACTIVITY")]
        activity: WorkoutActivityType,
    },

    /// List every known activity
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,
    },

    /// List locales that have translations
    Locales,

    /// Report activities without a translation, per locale
    Check {
        /// Exit with an error when any locale has gaps
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Serialize)]
struct ActivityRow<'a> {
    raw: u32,
    id: &'static str,
    name: &'static str,
    localized: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let locale = config.resolve_locale(cli.locale.clone(), |key| std::env::var(key).ok())?;

    let mut paths = cli.catalogs.clone();
    paths.extend(config.catalogs.iter().cloned());
    let files = config::load_catalogs(&paths)?;
    let localizer = Localizer::with_catalog(locale, Layered::new(files, BundledCatalog));
    tracing::debug!(locale = %localizer.locale(), catalogs = paths.len(), "ready");

    match cli.command {
        Commands::Name { activity } => {
            println!("{}", localizer.name(activity));
        }

        Commands::Localize { activity } => {
            println!("{}", localizer.localized_name(activity));
        }

        Commands::List { format } => {
            let rows: Vec<ActivityRow<'_>> = WorkoutActivityType::ALL
                .iter()
                .map(|activity| ActivityRow {
                    raw: activity.raw_value(),
                    id: activity.identifier().unwrap_or_default(),
                    name: activity.name(),
                    localized: localizer.localized_name(*activity),
                })
                .collect();

            match format {
                FormatArg::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                FormatArg::Text => {
                    println!("Activities ({}):", localizer.locale());
                    for row in &rows {
                        println!(
                            "  {:>4}  {:<30} {:<33} {}",
                            row.raw, row.id, row.name, row.localized
                        );
                    }
                }
            }
        }

        Commands::Locales => print_locales(&localizer),

        Commands::Check { strict, format } => check(&localizer, strict, format)?,
    }

    Ok(())
}

fn print_locales(localizer: &Localizer<CliCatalog>) {
    println!("Available locales:");
    println!("  {:<10} {:<12} {}", "en", "English", "English (canonical)");
    for locale in localizer.catalog().locales() {
        let code = locale.language();
        println!(
            "  {:<10} {:<12} {}",
            locale.to_string(),
            language_name(code).unwrap_or("-"),
            native_name(code).unwrap_or("-")
        );
    }
}

fn check(localizer: &Localizer<CliCatalog>, strict: bool, format: FormatArg) -> Result<()> {
    let report = coverage::coverage(localizer.catalog());
    match format {
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        FormatArg::Text => print_coverage(&report),
    }

    let gaps = report.iter().filter(|entry| !entry.is_complete()).count();
    if strict && gaps > 0 {
        bail!("{gaps} locale(s) have untranslated activities");
    }
    Ok(())
}

fn print_coverage(report: &[LocaleCoverage]) {
    let total = WorkoutActivityType::ALL.len();

    println!("Translation coverage:");
    for entry in report {
        let status = if entry.is_complete() {
            "complete".green()
        } else {
            format!("{} missing", entry.missing.len()).yellow()
        };
        println!(
            "  {:<10} {:>3}/{}  {}",
            entry.locale.to_string(),
            entry.translated,
            total,
            status
        );
        for missing in &entry.missing {
            println!("      - {missing}");
        }
    }
}
