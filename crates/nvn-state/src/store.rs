//! # Compliance Store
//!
//! The store owns the in-memory [`ComplianceState`] and the policy around
//! its persistence. It is constructed explicitly with a backend — there is
//! no ambient global — and handed to consumers either directly or as a
//! [`SharedComplianceStore`].
//!
//! ## Persistence policy
//!
//! - Hydration ([`ComplianceStore::load`]) never fails; any read problem
//!   yields the gated defaults.
//! - Every mutation persists the full record immediately. A write failure
//!   is logged and swallowed here, visibly — the in-memory state remains
//!   correct for the session and the next mutation retries naturally.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use nvn_core::{Region, Timestamp};

use crate::record::{ComplianceState, GatePhase};
use crate::storage::{StorageBackend, StorageError, STORAGE_KEY};

/// Error raised by gate transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// `accept()` was called before a region was selected.
    #[error("cannot accept terms before a region is selected")]
    RegionRequired,
}

/// The single source of truth for the visitor's gate standing.
#[derive(Debug)]
pub struct ComplianceStore<B: StorageBackend> {
    backend: B,
    state: ComplianceState,
}

impl<B: StorageBackend> ComplianceStore<B> {
    /// Hydrate a store from the backend.
    ///
    /// Reads the record under [`STORAGE_KEY`]. An absent record, a read
    /// failure, or a malformed record all yield the gated defaults — this
    /// constructor never errors.
    pub fn load(backend: B) -> Self {
        let state = match backend.read(STORAGE_KEY) {
            Ok(Some(raw)) => ComplianceState::hydrate(&raw),
            Ok(None) => ComplianceState::gated(),
            Err(e) => {
                tracing::warn!(error = %e, "compliance record unreadable, using gated defaults");
                ComplianceState::gated()
            }
        };
        tracing::debug!(phase = %state.phase(), "compliance store hydrated");
        Self { backend, state }
    }

    /// The current record.
    pub fn state(&self) -> &ComplianceState {
        &self.state
    }

    /// The current gate phase.
    pub fn phase(&self) -> GatePhase {
        self.state.phase()
    }

    /// Record the visitor's jurisdiction. Does not affect acceptance.
    pub fn set_region(&mut self, region: Region) {
        self.state.region = Some(region);
        tracing::info!(%region, "region selected");
        self.persist_best_effort();
    }

    /// Complete the gate: `Gated → Open`.
    ///
    /// Requires a region on record; without one the store stays gated and
    /// returns [`GateError::RegionRequired`]. Idempotent apart from
    /// refreshing the acceptance timestamp.
    pub fn accept(&mut self) -> Result<(), GateError> {
        if self.state.region.is_none() {
            return Err(GateError::RegionRequired);
        }
        self.state.accepted = true;
        self.state.accepted_at = Some(Timestamp::now());
        tracing::info!(region = ?self.state.region, "compliance terms accepted");
        self.persist_best_effort();
        Ok(())
    }

    /// Restore the gated defaults: `Open → Gated`.
    pub fn reset(&mut self) {
        self.state = ComplianceState::gated();
        tracing::info!("compliance state reset");
        self.persist_best_effort();
    }

    /// Wrap this store in a process-wide shareable handle.
    pub fn share(self) -> SharedComplianceStore<B> {
        Arc::new(RwLock::new(self))
    }

    /// Write the full record to the backend.
    fn write_record(&mut self) -> Result<(), StorageError> {
        let raw = self.state.to_json()?;
        self.backend.write(STORAGE_KEY, &raw)
    }

    /// Persist, ignoring failure.
    ///
    /// This is the one place the swallow happens: the state in memory is
    /// already correct, and the next mutation will attempt persistence
    /// again. The worst outcome of a lost write is that a future session
    /// starts gated.
    fn persist_best_effort(&mut self) {
        if let Err(e) = self.write_record() {
            tracing::warn!(error = %e, "compliance record not persisted, continuing in memory");
        }
    }
}

/// A cheap-clone handle giving every surface the same logical store.
///
/// Mutations only originate from direct user actions on the UI thread, so
/// writer contention is not a concern; the lock exists so that render
/// passes on other threads observe a fully-applied record.
pub type SharedComplianceStore<B> = Arc<RwLock<ComplianceStore<B>>>;
