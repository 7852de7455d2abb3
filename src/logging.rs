//! Tracing subscriber setup for hosts that do not install their own.

/// Install a formatted subscriber. `RUST_LOG` wins when set; otherwise the
/// crate logs at `level`. Returns false if a subscriber was already installed.
pub fn init(level: &str) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("led_cube={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
