use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "CRICKET_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber. Filter directives come from `CRICKET_LOG`,
/// e.g. `CRICKET_LOG=match_server=debug,warp=info`; defaults to `info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
