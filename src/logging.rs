// SPDX-License-Identifier: PMPL-1.0-or-later

//! Logging setup for the CLI.
//!
//! Library code only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. The CLI installs one that writes to stderr so
//! that stdout carries nothing but names.
//!
//! `RUST_LOG` takes precedence. Without it the filter is `warn`, or
//! `activity_names=debug,warn` with `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "activity_names=debug,warn"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(false),
        )
        .try_init();
}
