//! # Mask Subcommand
//!
//! Preview the masking treatment for a value under the current gate state.
//! Useful for checking what a gated visitor actually sees for a given
//! figure without driving the whole site.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use nvn_mask::{Content, MaskOptions, MaskedRenderer};
use nvn_scramble::{DigitOffset, ScrambleCodec};
use nvn_state::{ComplianceStore, FileBackend};

/// Arguments for the `nvn mask` subcommand.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// The value to render (e.g. "-12.34%").
    pub value: String,

    /// Fixed digit offset in 1..=9 instead of an entropy draw, for
    /// reproducible output.
    #[arg(long)]
    pub offset: Option<u8>,

    /// Always mask, regardless of the gate state.
    #[arg(long)]
    pub force: bool,

    /// Render the skeleton placeholder treatment.
    #[arg(long)]
    pub skeleton: bool,

    /// Render blank instead of scrambling.
    #[arg(long)]
    pub no_scramble: bool,

    /// Skip the blur filter.
    #[arg(long)]
    pub no_blur: bool,

    /// Use the block wrapper instead of inline.
    #[arg(long)]
    pub block: bool,

    /// Emit the full drawing instructions as JSON instead of just the text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the mask subcommand. Returns the process exit code.
pub fn run_mask(args: &MaskArgs, store_dir: &Path) -> Result<u8> {
    let offset = match args.offset {
        Some(v) => DigitOffset::new(v)?,
        None => DigitOffset::generate(),
    };

    let store = ComplianceStore::load(FileBackend::new(store_dir));
    let renderer = MaskedRenderer::new(store, ScrambleCodec::new(offset));

    let options = MaskOptions {
        force: args.force,
        scramble: !args.no_scramble,
        blur: !args.no_blur,
        skeleton: args.skeleton,
        inline: !args.block,
        ..MaskOptions::default()
    };

    let output = renderer.render(&Content::from(args.value.as_str()), &options);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.text);
    }
    Ok(0)
}
