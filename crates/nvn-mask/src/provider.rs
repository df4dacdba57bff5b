//! # State Providers
//!
//! The seam between the renderer and the compliance store. A provider
//! answers one question — has the visitor accepted? — and is allowed to
//! fail. The renderer maps failure to "not accepted".

use thiserror::Error;

use nvn_state::{ComplianceState, ComplianceStore, SharedComplianceStore, StorageBackend};

/// The provider could not determine the gate state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("compliance state unavailable: {0}")]
pub struct StateReadError(pub String);

/// Read access to the visitor's acceptance standing.
pub trait StateProvider {
    /// Whether the visitor has accepted the terms.
    ///
    /// # Errors
    ///
    /// Returns [`StateReadError`] when the state cannot be read; callers
    /// must treat that as not accepted.
    fn accepted(&self) -> Result<bool, StateReadError>;
}

/// A snapshot provider: answers from a fixed record.
impl StateProvider for ComplianceState {
    fn accepted(&self) -> Result<bool, StateReadError> {
        Ok(self.accepted)
    }
}

/// The live store is its own provider.
impl<B: StorageBackend> StateProvider for ComplianceStore<B> {
    fn accepted(&self) -> Result<bool, StateReadError> {
        Ok(self.state().accepted)
    }
}

/// Shared-handle provider: every surface holding a clone reads the same
/// logical record.
impl<B: StorageBackend> StateProvider for SharedComplianceStore<B> {
    fn accepted(&self) -> Result<bool, StateReadError> {
        Ok(self.read().state().accepted)
    }
}
