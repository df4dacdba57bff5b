//! # nvn-scramble — Pre-Consent Content Obfuscation
//!
//! Implements the text transform applied to every data point rendered
//! before a visitor has passed the compliance gate. The transform keeps the
//! visual shape of the underlying value — digits stay digit-shaped, letters
//! stay letter-shaped, units and separators survive — while making the true
//! value unreadable.
//!
//! ## Model
//!
//! A page load draws one [`DigitOffset`] in `[1, 9]` from OS entropy. For
//! the lifetime of that session every digit `d` renders as
//! `(d + offset) mod 10`, so repeated renders of the same value are stable
//! (no flicker between frames) without revealing the value. The shift is a
//! bijection on `0..=9` — no two digits collide.
//!
//! ## Crate Policy
//!
//! - [`ScrambleCodec::scramble`] is a pure function of the input and the
//!   session offset: no I/O, no error surface, total over all strings.
//! - The only fallible operation is the entropy draw, which degrades to a
//!   fixed offset rather than failing.

pub mod codec;
pub mod offset;

pub use codec::{ScrambleCodec, BLOCK_GLYPH, EMPTY_PLACEHOLDER_LEN};
pub use offset::{DigitOffset, OffsetError};
