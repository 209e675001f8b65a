use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
/// Returns `false` when a subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    let default_level = if verbose { "debug" } else { "info" };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .try_init();

    match installed {
        Ok(()) => true,
        Err(err) => {
            // The existing subscriber stays in charge; its filter decides if this shows.
            debug!("Tracing subscriber already installed: {err}");
            false
        }
    }
}
