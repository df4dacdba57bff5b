//! # nvn-mask — Gate-Aware Masked Rendering
//!
//! Decides, for every data-bearing surface, whether to show real content,
//! a scrambled stand-in, or a skeleton placeholder — consistently, from a
//! single rule:
//!
//! ```text
//! should_mask = force OR NOT accepted
//! ```
//!
//! The decision produces a [`MaskedOutput`]: structured drawing
//! instructions (wrapper kind, visible text, blur strength, assistive-tech
//! visibility) that any view layer can apply. This crate does no drawing
//! itself.
//!
//! ## Fail-closed
//!
//! The renderer reads acceptance through a [`StateProvider`]. A provider
//! that cannot answer counts as *not accepted*: an internal failure can
//! keep content masked longer than necessary, never unmask it early.

pub mod content;
pub mod provider;
pub mod render;

pub use content::Content;
pub use provider::{StateProvider, StateReadError};
pub use render::{MaskOptions, MaskedOutput, MaskedRenderer, WrapperKind, DEFAULT_BLUR_PX};
