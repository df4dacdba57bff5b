//! # The Render Decision
//!
//! One rule, applied identically on every surface:
//! `should_mask = force || !accepted`. Everything else in this module is
//! the faithful description of what the surface must draw in each case.

use serde::{Deserialize, Serialize};

use nvn_scramble::ScrambleCodec;

use crate::content::Content;
use crate::provider::StateProvider;

/// Default blur strength in pixels.
pub const DEFAULT_BLUR_PX: u8 = 3;

/// Knobs for a single render decision.
///
/// The defaults reproduce the standard data-point treatment: mask only
/// while gated, scramble, blur at [`DEFAULT_BLUR_PX`], inline wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskOptions {
    /// Always mask, regardless of acceptance.
    pub force: bool,
    /// Apply the scramble codec rather than rendering blank.
    pub scramble: bool,
    /// Apply a visual blur filter, independent of scrambling.
    pub blur: bool,
    /// Render a shimmering placeholder bar instead of scrambled text.
    pub skeleton: bool,
    /// Blur strength override.
    pub blur_px: u8,
    /// Inline (`span`-equivalent) wrapper rather than block (`div`).
    pub inline: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            force: false,
            scramble: true,
            blur: true,
            skeleton: false,
            blur_px: DEFAULT_BLUR_PX,
            inline: true,
        }
    }
}

impl MaskOptions {
    /// The skeleton-placeholder treatment.
    pub fn skeleton() -> Self {
        Self {
            skeleton: true,
            ..Self::default()
        }
    }
}

/// The wrapper element a surface should emit around the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapperKind {
    /// Embeddable in running text (`span`-equivalent).
    Inline,
    /// Standalone block (`div`-equivalent).
    Block,
}

/// Drawing instructions produced by a render decision.
///
/// When `masked` is false the surface renders the original content
/// verbatim (for [`Content::Node`] that means the node itself; `text` then
/// carries the text variant's value, or is empty for nodes) with none of
/// the masking affordances applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedOutput {
    /// Whether the content was withheld.
    pub masked: bool,
    /// Wrapper element to emit.
    pub wrapper: WrapperKind,
    /// Text to place in the wrapper.
    pub text: String,
    /// Blur strength to apply, if any.
    pub blur_px: Option<u8>,
    /// Render as a fixed-width shimmering placeholder bar.
    pub skeleton: bool,
    /// Hide the text from assistive technology.
    pub hidden_from_assistive_tech: bool,
    /// Disable text selection on the wrapper.
    pub selection_disabled: bool,
}

/// The gate-aware renderer: a state provider plus the session codec.
#[derive(Debug)]
pub struct MaskedRenderer<P: StateProvider> {
    provider: P,
    codec: ScrambleCodec,
}

impl<P: StateProvider> MaskedRenderer<P> {
    /// Create a renderer over a state provider and a session codec.
    pub fn new(provider: P, codec: ScrambleCodec) -> Self {
        Self { provider, codec }
    }

    /// The session codec.
    pub fn codec(&self) -> ScrambleCodec {
        self.codec
    }

    /// Decide how to draw `content` under the current gate state.
    pub fn render(&self, content: &Content, options: &MaskOptions) -> MaskedOutput {
        let wrapper = if options.inline {
            WrapperKind::Inline
        } else {
            WrapperKind::Block
        };

        if !self.should_mask(options.force) {
            return MaskedOutput {
                masked: false,
                wrapper,
                text: content.as_text().unwrap_or_default().to_string(),
                blur_px: None,
                skeleton: false,
                hidden_from_assistive_tech: false,
                selection_disabled: false,
            };
        }

        // Masked. Scrambling applies to text only; everything else
        // degrades to a single space so the wrapper still occupies layout.
        let text = match (options.scramble, content.as_text()) {
            (true, Some(s)) => self.codec.scramble(s),
            _ => " ".to_string(),
        };

        if options.skeleton {
            return MaskedOutput {
                masked: true,
                wrapper,
                text,
                blur_px: None,
                skeleton: true,
                hidden_from_assistive_tech: true,
                selection_disabled: true,
            };
        }

        MaskedOutput {
            masked: true,
            wrapper,
            text,
            blur_px: options.blur.then_some(options.blur_px),
            skeleton: false,
            hidden_from_assistive_tech: false,
            selection_disabled: true,
        }
    }

    fn should_mask(&self, force: bool) -> bool {
        let accepted = self.provider.accepted().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "gate state unreadable, masking");
            false
        });
        force || !accepted
    }
}
