//! Subscriber installation for the app.

use tracing::{subscriber::SetGlobalDefaultError, Level};

/// Install a global `fmt` subscriber that records events up to `level`.
///
/// Fails if a global subscriber is already installed, for example when `init` is called twice.
///
/// ```rust
/// rally::logger::init(tracing::Level::DEBUG).unwrap();
/// assert!(rally::logger::init(tracing::Level::INFO).is_err());
/// ```
pub fn init(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
