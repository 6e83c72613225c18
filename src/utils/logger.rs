//! Custom logger initialization to exclude timestamps but keep colors.
//! This provides cleaner logs by removing the timestamp prefix.
//!
//! Use COUNTERPUNCH_LOG=info or COUNTERPUNCH_LOG=debug to increase
//! verbosity. Example: COUNTERPUNCH_LOG=debug counterpunch --load-ufo ...

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Initializes the inspector's logger. Call once, from the binary only;
/// library code just emits `log` records.
pub fn init_logger() {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            // Do nothing, effectively removing timestamps
            Ok(())
        }
    }

    // Default to warn for minimal noise unless the user overrides
    let default_level = std::env::var("COUNTERPUNCH_LOG")
        .unwrap_or_else(|_| "warn".to_string());

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true); // Keep colors

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_filter(
                    tracing_subscriber::filter::EnvFilter::from_default_env()
                        .add_directive(
                            default_level
                                .parse()
                                .unwrap_or_else(|_| LevelFilter::WARN.into()),
                        ),
                ),
        )
        .init();
}
