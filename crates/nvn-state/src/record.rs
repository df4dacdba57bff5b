//! # The Persisted Compliance Record
//!
//! The record written under [`crate::storage::STORAGE_KEY`]:
//!
//! ```json
//! { "accepted": true, "region": "US", "acceptedAt": "2026-01-15T12:00:00Z" }
//! ```
//!
//! Hydration is lenient and field-wise: each field is taken from the
//! persisted JSON if it parses, and falls back to its default otherwise.
//! A record that claims acceptance without a timestamp or a region
//! violates the gate invariants and hydrates as not accepted.

use serde::{Deserialize, Serialize};

use nvn_core::{Region, Timestamp};

/// The visitor's standing with the compliance gate.
///
/// Invariant: `accepted` implies both `accepted_at` and `region` are set.
/// [`ComplianceState::hydrate`] maintains this on the way in from storage;
/// the store's mutations preserve it thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceState {
    /// Whether the visitor has completed the gate.
    pub accepted: bool,
    /// Selected jurisdiction, set independently of acceptance.
    pub region: Option<Region>,
    /// When acceptance occurred; `None` until accepted.
    pub accepted_at: Option<Timestamp>,
}

impl ComplianceState {
    /// The gated defaults: not accepted, no region, no timestamp.
    pub fn gated() -> Self {
        Self::default()
    }

    /// The phase the gate is in for this record.
    pub fn phase(&self) -> GatePhase {
        if self.accepted {
            GatePhase::Open
        } else {
            GatePhase::Gated
        }
    }

    /// Hydrate a record from persisted JSON, field by field.
    ///
    /// Never fails. Unknown fields are ignored; missing or unparseable
    /// fields take their defaults. If the result would claim acceptance
    /// without a timestamp or without a region, acceptance is dropped —
    /// the gate invariants win over the stored bytes, and the failure
    /// direction is toward the gate staying closed.
    pub fn hydrate(raw: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "malformed compliance record, using gated defaults");
                return Self::gated();
            }
        };

        let accepted = value
            .get("accepted")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);
        let region = value
            .get("region")
            .and_then(serde_json::Value::as_str)
            .and_then(|s| s.parse::<Region>().ok());
        let accepted_at = value
            .get("acceptedAt")
            .and_then(serde_json::Value::as_str)
            .and_then(|s| Timestamp::parse(s).ok());

        Self {
            accepted: accepted && accepted_at.is_some() && region.is_some(),
            region,
            accepted_at,
        }
    }

    /// Serialize for persistence.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The two phases of the compliance gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatePhase {
    /// Terms not yet accepted; all data surfaces mask.
    Gated,
    /// Terms accepted; data renders verbatim.
    Open,
}

impl std::fmt::Display for GatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Gated => "GATED",
            Self::Open => "OPEN",
        };
        f.write_str(s)
    }
}
