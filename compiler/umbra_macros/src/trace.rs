use std::sync::Once;

/// Environment variable holding the `EnvFilter` directives for expansion logs.
const LOG_ENV: &str = "UMBRA_MACRO_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for expansion logs.
///
/// Does nothing unless `UMBRA_MACRO_LOG` is set. Safe to call on every
/// expansion.
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_some() {
            let filter = EnvFilter::from_env(LOG_ENV);
            // The compiler may load this crate more than once; keep whichever
            // subscriber got there first.
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
