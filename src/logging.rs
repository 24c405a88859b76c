//! Tracing initialization.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default level for a `-v` count: info, then debug, then trace.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize tracing to stderr. Later calls are no-ops.
///
/// `RUST_LOG` directives are layered over the level picked by `verbose`.
/// Stdout is left alone so rendered HTML can be piped.
pub fn init(verbose: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level_for(verbose).into())
            .from_env_lossy();

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init();
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e)
        }
    });
}
