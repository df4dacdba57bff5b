//! # Gate Subcommand
//!
//! Inspect and drive the persisted compliance gate record.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use nvn_core::Region;
use nvn_state::{ComplianceStore, FileBackend, GateError};

/// Arguments for the `nvn gate` subcommand.
#[derive(Args, Debug)]
pub struct GateArgs {
    #[command(subcommand)]
    pub command: GateCommand,
}

/// Gate subcommands.
#[derive(Subcommand, Debug)]
pub enum GateCommand {
    /// Show the current phase, region, and acceptance time.
    Status {
        /// Emit the raw record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Record the visitor's jurisdiction. Accepts canonical codes ("US",
    /// "EU", ...) or selection-list labels ("United States"); labels
    /// outside the closed set map to OTHER.
    SetRegion {
        /// Region code or display label.
        region: String,
    },
    /// Accept the terms. Fails unless a region is on record.
    Accept,
    /// Restore the gated defaults.
    Reset,
}

/// Execute the gate subcommand. Returns the process exit code.
pub fn run_gate(args: &GateArgs, store_dir: &Path) -> Result<u8> {
    tracing::debug!(store_dir = %store_dir.display(), "hydrating gate store");
    let mut store = ComplianceStore::load(FileBackend::new(store_dir));

    match &args.command {
        GateCommand::Status { json } => {
            if *json {
                println!("{}", store.state().to_json()?);
            } else {
                let state = store.state();
                println!("phase:       {}", state.phase());
                println!(
                    "region:      {}",
                    state.region.map_or("-".to_string(), |r| r.to_string())
                );
                println!(
                    "accepted at: {}",
                    state.accepted_at.map_or("-".to_string(), |t| t.to_iso8601())
                );
            }
            Ok(0)
        }
        GateCommand::SetRegion { region } => {
            let region = Region::from_label(region);
            store.set_region(region);
            println!("region set to {region}");
            Ok(0)
        }
        GateCommand::Accept => match store.accept() {
            Ok(()) => {
                println!("terms accepted, gate is {}", store.phase());
                Ok(0)
            }
            Err(e @ GateError::RegionRequired) => {
                eprintln!("error: {e}");
                Ok(1)
            }
        },
        GateCommand::Reset => {
            store.reset();
            println!("gate reset, phase is {}", store.phase());
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvn_state::GatePhase;

    fn gate(command: GateCommand) -> GateArgs {
        GateArgs { command }
    }

    #[test]
    fn set_region_then_accept_opens_gate() {
        let dir = tempfile::tempdir().unwrap();

        let code = run_gate(
            &gate(GateCommand::SetRegion {
                region: "US".into(),
            }),
            dir.path(),
        )
        .unwrap();
        assert_eq!(code, 0);

        let code = run_gate(&gate(GateCommand::Accept), dir.path()).unwrap();
        assert_eq!(code, 0);

        let store = ComplianceStore::load(FileBackend::new(dir.path()));
        assert_eq!(store.phase(), GatePhase::Open);
        assert_eq!(store.state().region, Some(Region::Us));
    }

    #[test]
    fn accept_without_region_exits_nonzero() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_gate(&gate(GateCommand::Accept), dir.path()).unwrap();
        assert_eq!(code, 1);

        let store = ComplianceStore::load(FileBackend::new(dir.path()));
        assert_eq!(store.phase(), GatePhase::Gated);
    }

    #[test]
    fn set_region_accepts_display_labels() {
        let dir = tempfile::tempdir().unwrap();
        run_gate(
            &gate(GateCommand::SetRegion {
                region: "United Kingdom".into(),
            }),
            dir.path(),
        )
        .unwrap();

        let store = ComplianceStore::load(FileBackend::new(dir.path()));
        assert_eq!(store.state().region, Some(Region::Uk));
    }

    #[test]
    fn unknown_label_maps_to_other() {
        let dir = tempfile::tempdir().unwrap();
        run_gate(
            &gate(GateCommand::SetRegion {
                region: "Atlantis".into(),
            }),
            dir.path(),
        )
        .unwrap();

        let store = ComplianceStore::load(FileBackend::new(dir.path()));
        assert_eq!(store.state().region, Some(Region::Other));
    }

    #[test]
    fn reset_restores_defaults_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        run_gate(
            &gate(GateCommand::SetRegion {
                region: "JP".into(),
            }),
            dir.path(),
        )
        .unwrap();
        run_gate(&gate(GateCommand::Accept), dir.path()).unwrap();
        run_gate(&gate(GateCommand::Reset), dir.path()).unwrap();

        let store = ComplianceStore::load(FileBackend::new(dir.path()));
        assert_eq!(store.phase(), GatePhase::Gated);
        assert_eq!(store.state().region, None);
        assert_eq!(store.state().accepted_at, None);
    }

    #[test]
    fn status_runs_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_gate(&gate(GateCommand::Status { json: false }), dir.path()).unwrap();
        assert_eq!(code, 0);
        let code = run_gate(&gate(GateCommand::Status { json: true }), dir.path()).unwrap();
        assert_eq!(code, 0);
    }
}
