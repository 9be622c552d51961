use super::category::Category;
use crate::CATEGORY_OFFSET;

/// An opaque hand strength. Higher is strictly stronger.
///
/// The 16-bit space is cut into nine bands of [`CATEGORY_OFFSET`] each.
/// The band is the hand category, and the position within the band
/// orders hands of that category by their ranks and kickers.
///
/// full house, sixes full of sevens
/// 28672 + 1 + 4 * 12 + 4
/// 0b0111000000110101
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u16);

impl Score {
    /// the band index, 1..=9 for any scored hand
    pub const fn band(&self) -> u16 {
        self.0 / CATEGORY_OFFSET
    }
    /// zero-based position within the band
    pub const fn sub_index(&self) -> u16 {
        (self.0 % CATEGORY_OFFSET).saturating_sub(1)
    }
    pub fn category(&self) -> Option<Category> {
        Category::try_from(self.band()).ok()
    }
}

/// u16 isomorphism
impl From<u16> for Score {
    fn from(n: u16) -> Self {
        Self(n)
    }
}
impl From<Score> for u16 {
    fn from(s: Score) -> Self {
        s.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_and_index() {
        let score = Score::from(28672 + 1 + 4 * 12 + 4);
        assert_eq!(score.band(), 7);
        assert_eq!(score.sub_index(), 52);
        assert_eq!(score.category(), Some(Category::FullHouse));
    }

    #[test]
    fn out_of_band() {
        assert_eq!(Score::from(0).category(), None);
        assert_eq!(Score::from(4095).category(), None);
        assert_eq!(Score::from(40960).category(), None);
        assert_eq!(Score::from(4096).sub_index(), 0);
    }
}
