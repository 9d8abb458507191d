use rustc_hash::FxHashMap;

use skinfx_core::color::Color;
use skinfx_core::math::{point, size, Point, Rect};
use skinfx_core::range::CharacterRange;
use skinfx_core::target::TextLayout;

use crate::SoftBrush;

/// A single line of monospaced text.
///
/// Every non-whitespace character is drawn as a solid cell of `advance` by
/// `line_height` logical points. Drawing-effect overrides record the color of
/// the brush they were set with, not the brush itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftLayout {
    text: Vec<char>,
    advance: f32,
    line_height: f32,
    effects: FxHashMap<u32, Color>,
}

impl SoftLayout {
    pub fn new(text: &str, advance: f32, line_height: f32) -> Self {
        Self {
            text: text.chars().collect(),
            advance,
            line_height,
            effects: FxHashMap::default(),
        }
    }

    /// The number of characters in the layout.
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The override color for the character at `position`, if any.
    pub fn drawing_effect(&self, position: u32) -> Option<Color> {
        self.effects.get(&position).copied()
    }

    /// All positions carrying an override, in ascending order.
    pub fn overridden_positions(&self) -> Vec<u32> {
        let mut positions: Vec<u32> = self.effects.keys().copied().collect();
        positions.sort_unstable();
        positions
    }

    /// The logical rectangle of character `position` when drawn at `origin`.
    pub fn cell(&self, origin: Point, position: u32) -> Rect {
        Rect::new(
            point(origin.x + position as f32 * self.advance, origin.y),
            size(self.advance, self.line_height),
        )
    }

    pub(crate) fn glyph_cells(&self, origin: Point) -> impl Iterator<Item = (u32, Rect)> + '_ {
        self.text
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(move |(i, _)| (i as u32, self.cell(origin, i as u32)))
    }
}

impl TextLayout for SoftLayout {
    type Brush = SoftBrush;

    fn set_drawing_effect(&mut self, brush: &SoftBrush, range: CharacterRange) {
        if !range.is_valid() {
            return;
        }

        let end = range.end().min(self.text.len() as i64);
        for position in range.start as i64..end {
            self.effects.insert(position as u32, brush.color());
        }
    }

    fn clear_drawing_effects(&mut self) {
        self.effects.clear();
    }
}
