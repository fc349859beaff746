// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the crate logs at `info` and
//! everything else (wgpu, winit, ...) at `warn`.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn,folio=info";

/// Installs the global `fmt` subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
