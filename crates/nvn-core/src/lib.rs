//! # nvn-core — Foundational Types for the Nirvana Compliance Gate
//!
//! This crate is the bedrock of the Nirvana compliance-gate workspace. It
//! defines the primitive types every other crate builds on: the closed
//! [`Region`] enumeration used by the jurisdiction gate, the UTC-only
//! [`Timestamp`] recorded at acceptance, and the shared error types.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Region` enum.** One definition, nine variants, exhaustive
//!    `match` everywhere. Display-only selection labels are mapped onto the
//!    closed set at the edge — no bare strings for jurisdictions.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with `Z`
//!    suffix and seconds precision. The persisted compliance record always
//!    carries `YYYY-MM-DDTHH:MM:SSZ`, never a local offset.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nvn-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public domain types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod region;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{RegionParseError, TimestampError};
pub use region::{Region, REGION_COUNT};
pub use temporal::Timestamp;
