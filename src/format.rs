use smallvec::SmallVec;

use skinfx_core::math::Point;
use skinfx_core::range::CharacterRange;
use skinfx_core::target::RenderTarget;

use crate::shadow::ShadowFormat;

/// The resolved character ranges of an inline format.
pub type CharacterRanges = SmallVec<[CharacterRange; 4]>;

/// State shared by every inline format: the pattern it was configured with and
/// the character ranges that pattern currently resolves to.
///
/// Resolving the pattern against a string happens elsewhere; the result is
/// handed in with [`InlineFormatBase::set_ranges`].
#[derive(Default, Debug, Clone, PartialEq)]
pub struct InlineFormatBase {
    pattern: String,
    ranges: CharacterRanges,
}

impl InlineFormatBase {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ranges: CharacterRanges::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// Whether `pattern` equals the stored pattern, ignoring letter case.
    pub fn pattern_matches(&self, pattern: &str) -> bool {
        self.pattern
            .chars()
            .flat_map(char::to_lowercase)
            .eq(pattern.chars().flat_map(char::to_lowercase))
    }

    pub fn ranges(&self) -> &[CharacterRange] {
        &self.ranges
    }

    pub fn set_ranges(&mut self, ranges: impl IntoIterator<Item = CharacterRange>) {
        self.ranges.clear();
        self.ranges.extend(ranges);
    }
}

/// The kind of an [`InlineFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineFormatKind {
    Shadow,
}

/// An effect applied to part of a run of styled text.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineFormat {
    Shadow(ShadowFormat),
}

impl InlineFormat {
    pub fn kind(&self) -> InlineFormatKind {
        match self {
            Self::Shadow(_) => InlineFormatKind::Shadow,
        }
    }

    pub fn base(&self) -> &InlineFormatBase {
        match self {
            Self::Shadow(format) => format.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut InlineFormatBase {
        match self {
            Self::Shadow(format) => format.base_mut(),
        }
    }

    /// Draw this format for a layout of `str_len` characters at `draw_position`.
    ///
    /// Does nothing when either the target or the layout is absent.
    pub fn apply<T: RenderTarget>(
        &self,
        target: Option<&mut T>,
        layout: Option<&mut T::Layout>,
        brush: &T::Brush,
        str_len: u32,
        draw_position: Point,
    ) {
        match self {
            Self::Shadow(format) => format.render(target, layout, brush, str_len, draw_position),
        }
    }
}

impl From<ShadowFormat> for InlineFormat {
    fn from(format: ShadowFormat) -> Self {
        Self::Shadow(format)
    }
}
