/// A span of characters within a string.
///
/// A range with a `length` of zero or less is invalid and covers nothing.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRange {
    /// The index of the first character in the range.
    pub start: u32,
    /// The number of characters in the range.
    pub length: i32,
}

impl CharacterRange {
    pub const fn new(start: u32, length: i32) -> Self {
        Self { start, length }
    }

    /// A range covering the single character at `position`.
    pub const fn single(position: u32) -> Self {
        Self {
            start: position,
            length: 1,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.length > 0
    }

    /// One past the last covered position.
    ///
    /// This is computed in 64 bits so that ranges near `u32::MAX` cannot wrap.
    pub const fn end(&self) -> i64 {
        self.start as i64 + self.length as i64
    }

    /// Whether this range is valid and contains `position`.
    #[inline]
    pub const fn covers(&self, position: u32) -> bool {
        self.is_valid() && position >= self.start && (position as i64) < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_half_open_span() {
        let r = CharacterRange::new(2, 3);
        assert!(!r.covers(1));
        assert!(r.covers(2));
        assert!(r.covers(4));
        assert!(!r.covers(5));
    }

    #[test]
    fn invalid_ranges_cover_nothing() {
        for length in [0, -1, i32::MIN] {
            let r = CharacterRange::new(0, length);
            assert!(!r.is_valid());
            assert!((0..8).all(|i| !r.covers(i)));
        }
    }

    #[test]
    fn end_does_not_wrap() {
        let r = CharacterRange::new(u32::MAX - 1, i32::MAX);
        assert!(r.covers(u32::MAX));
        assert!(!r.covers(0));
        assert_eq!(r.end(), (u32::MAX - 1) as i64 + i32::MAX as i64);
    }
}
