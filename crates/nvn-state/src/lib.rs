//! # nvn-state — Compliance Gate State
//!
//! Single source of truth for whether a visitor may see real data. The
//! gate has exactly two phases:
//!
//! ```text
//! Gated ──accept()──▶ Open
//!   ▲                  │
//!   └────reset()───────┘
//! ```
//!
//! `accept()` requires a region on record; `reset()` is the only way back.
//! No other transitions exist.
//!
//! ## Persistence
//!
//! The record survives reloads through a [`StorageBackend`]. Hydration
//! never fails — absent, malformed, or unreadable records fall back to the
//! gated defaults, field by field. Mutations persist immediately;
//! a persistence failure is logged and swallowed, and the in-memory state
//! stays authoritative for the running session. The failure direction is
//! always toward masking, never away from it.
//!
//! ## Sharing
//!
//! The store is explicitly constructed with its backend — there is no
//! ambient global. Surfaces that need a common view share a
//! [`SharedComplianceStore`] handle; acceptance anywhere unmasks
//! everywhere on the next render pass.

pub mod record;
pub mod storage;
pub mod store;

// ─── Record re-exports ──────────────────────────────────────────────

pub use record::{ComplianceState, GatePhase};

// ─── Storage re-exports ─────────────────────────────────────────────

pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError, STORAGE_KEY};

// ─── Store re-exports ───────────────────────────────────────────────

pub use store::{ComplianceStore, GateError, SharedComplianceStore};
