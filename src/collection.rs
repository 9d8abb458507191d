use skinfx_core::math::Point;
use skinfx_core::target::{RenderTarget, TextLayout};

use crate::format::InlineFormat;
use crate::shadow::{ShadowFormat, ShadowParameters};

/// The inline formats of one text meter, in the order they were configured.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct InlineFormats {
    formats: Vec<InlineFormat>,
}

impl InlineFormats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InlineFormat> {
        self.formats.iter()
    }

    pub fn get(&self, index: usize) -> Option<&InlineFormat> {
        self.formats.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut InlineFormat> {
        self.formats.get_mut(index)
    }

    pub fn push(&mut self, format: impl Into<InlineFormat>) {
        self.formats.push(format.into());
    }

    /// Drop every format from `len` onwards.
    pub fn truncate(&mut self, len: usize) {
        if len < self.formats.len() {
            log::debug!("dropping {} inline formats", self.formats.len() - len);
        }
        self.formats.truncate(len);
    }

    /// Apply the shadow configuration at `index`, returning whether anything
    /// needs to be redrawn.
    ///
    /// An existing shadow at `index` is updated in place. If `index` is past the
    /// end, a new shadow is appended instead.
    pub fn update_shadow(&mut self, index: usize, params: ShadowParameters) -> bool {
        if index >= self.formats.len() {
            log::debug!("adding shadow inline format for pattern {:?}", params.pattern);
            self.formats.push(ShadowFormat::new(params).into());
            return true;
        }

        let InlineFormat::Shadow(shadow) = &mut self.formats[index];
        shadow.compare_and_update(
            &params.pattern,
            params.blur_radius,
            params.offset,
            params.color,
        )
    }

    /// Apply every format in order.
    ///
    /// Drawing-effect overrides are cleared from the layout before each format
    /// and once more after the last, so every format starts from an untouched
    /// layout and the layout is left ready for the regular text pass.
    pub fn apply_all<T: RenderTarget>(
        &self,
        mut target: Option<&mut T>,
        mut layout: Option<&mut T::Layout>,
        brush: &T::Brush,
        str_len: u32,
        draw_position: Point,
    ) {
        for format in self.formats.iter() {
            if let Some(layout) = layout.as_deref_mut() {
                layout.clear_drawing_effects();
            }
            format.apply(
                target.as_deref_mut(),
                layout.as_deref_mut(),
                brush,
                str_len,
                draw_position,
            );
        }

        if let Some(layout) = layout {
            layout.clear_drawing_effects();
        }
    }
}

impl<'a> IntoIterator for &'a InlineFormats {
    type Item = &'a InlineFormat;
    type IntoIter = std::slice::Iter<'a, InlineFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}
