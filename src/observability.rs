//! This module provides observability and diagnostics for the decoding pipeline.
//!
//! Decoding is a pure function of its inputs, so the only useful visibility is
//! which techniques a stream went through and how its length changed on the
//! way. The `log_metric!` macro is the primary tool; it routes structured
//! key/value events through the `log` facade at `trace` level.
//!
//! The macro body is wrapped in `#[cfg(debug_assertions)]`, so all calls to it
//! are compiled out of release builds.

use log::LevelFilter;
use std::sync::Once;

/// Logs a structured key-value metric through `log::trace!`, only in debug builds.
///
/// # Example
/// ```
/// use mlt_core::log_metric;
/// let runs = 4;
/// log_metric!("event"="rle_expand", "runs"=&runs);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::__log::trace!("MLT_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at the given level.
///
/// Only the first call has any effect; later calls (and calls made after the
/// host application installed its own logger) are ignored.
pub fn enable_verbose_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(cfg!(test));
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        let _ = builder.try_init();
    });
}
