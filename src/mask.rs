use skinfx_core::range::CharacterRange;
use skinfx_core::target::TextLayout;

/// Whether `position` is covered by at least one valid range.
#[inline]
pub fn is_shadow_source(position: u32, ranges: &[CharacterRange]) -> bool {
    ranges.iter().any(|range| range.covers(position))
}

/// Paint every position in `0..str_len` that no valid range covers with
/// `transparent`, one character at a time.
///
/// Positions covered by a range are left untouched. Returns the number of
/// positions that were overridden.
pub fn apply_exclusion_mask<L: TextLayout>(
    layout: &mut L,
    transparent: &L::Brush,
    str_len: u32,
    ranges: &[CharacterRange],
) -> u32 {
    let mut masked = 0;
    for position in 0..str_len {
        if !is_shadow_source(position, ranges) {
            layout.set_drawing_effect(transparent, CharacterRange::single(position));
            masked += 1;
        }
    }
    masked
}
