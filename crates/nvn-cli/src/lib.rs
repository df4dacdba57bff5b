//! # nvn-cli — Compliance Gate CLI
//!
//! Provides the `nvn` command-line interface for operating the gate
//! outside a browser: support can inspect a visitor-shaped store, QA can
//! drive the gate through its transitions, and the masking treatment can
//! be previewed for any value.
//!
//! ## Subcommands
//!
//! - `nvn gate status` — Current phase, region, and acceptance time.
//! - `nvn gate set-region <REGION>` — Record a jurisdiction (code or label).
//! - `nvn gate accept` — Complete the gate.
//! - `nvn gate reset` — Back to the gated defaults.
//! - `nvn mask <VALUE>` — Render a value through the masking pipeline.

pub mod gate;
pub mod mask;

use std::path::PathBuf;

/// Directory name holding the persisted gate record.
const STORE_DIR_NAME: &str = ".nirvana";

/// Resolve the default store directory: `$HOME/.nirvana`, or `./.nirvana`
/// when no home directory is available.
pub fn default_store_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(STORE_DIR_NAME),
        _ => PathBuf::from(STORE_DIR_NAME),
    }
}
