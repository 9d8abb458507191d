//! Inline text effects for desktop skins.
//!
//! An inline format applies an effect to part of a run of styled text. The
//! only effect provided here is [`ShadowFormat`], a drop shadow behind the
//! characters its pattern selects. Formats draw through the traits in
//! [`target`], so any backend implementing them can be used. The `soft`
//! feature provides a CPU backend.

mod collection;
mod format;
mod mask;

pub mod shadow;

pub use collection::InlineFormats;
pub use format::{CharacterRanges, InlineFormat, InlineFormatBase, InlineFormatKind};
pub use mask::{apply_exclusion_mask, is_shadow_source};
pub use shadow::{ShadowFormat, ShadowParameters};

pub use skinfx_core::*;

#[cfg(feature = "soft")]
pub use skinfx_soft as soft;
