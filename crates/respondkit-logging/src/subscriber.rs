//! Global subscriber installation

use crate::reload::{ReloadHandle, convert_level_to_filter};
use respondkit_core::{LogLevel, RespondResult};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::reload;

/// Initialize logging with a reloadable level filter
///
/// Installs a `fmt` subscriber as the global default. `RUST_LOG`, when set,
/// narrows output further. Call this once at startup; later calls leave the
/// existing subscriber in place and only adjust its level.
///
/// # Errors
///
/// Returns [`RespondError::Internal`](respondkit_core::RespondError::Internal)
/// when a later call cannot apply the new level.
pub fn init_logging(level: LogLevel) -> RespondResult<()> {
    init_with(ReloadHandle::global(), level)
}

fn init_with(reload_handle: &ReloadHandle, level: LogLevel) -> RespondResult<()> {
    use tracing_subscriber::prelude::*;

    if reload_handle.is_initialized() {
        return reload_handle.reload_level(level);
    }

    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(EnvFilter::try_from_default_env().ok())
        .with(tracing_subscriber::fmt::layer());

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        reload_handle.set_handle(handle);
    } else {
        tracing::debug!(%level, "global subscriber already installed, leaving it in place");
    }
    Ok(())
}
