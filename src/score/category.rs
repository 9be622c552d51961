/// The nine standard hand categories, weakest first.
///
/// Discriminants match the score band: `Score::band()` of any hand in
/// this category equals the discriminant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const fn all() -> [Self; 9] {
        [
            Self::HighCard,
            Self::Pair,
            Self::TwoPair,
            Self::ThreeOfAKind,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOfAKind,
            Self::StraightFlush,
        ]
    }
    /// lowest score in this category's band
    pub const fn floor(&self) -> u16 {
        *self as u16 * crate::CATEGORY_OFFSET
    }
}

/// band index -> Category, handing back the band when it is out of range
impl TryFrom<u16> for Category {
    type Error = u16;
    fn try_from(n: u16) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::HighCard),
            2 => Ok(Self::Pair),
            3 => Ok(Self::TwoPair),
            4 => Ok(Self::ThreeOfAKind),
            5 => Ok(Self::Straight),
            6 => Ok(Self::Flush),
            7 => Ok(Self::FullHouse),
            8 => Ok(Self::FourOfAKind),
            9 => Ok(Self::StraightFlush),
            n => Err(n),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "High Card"),
            Self::Pair => write!(f, "Pair"),
            Self::TwoPair => write!(f, "Two Pair"),
            Self::ThreeOfAKind => write!(f, "Three of a Kind"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::FullHouse => write!(f, "Full House"),
            Self::FourOfAKind => write!(f, "Four of a Kind"),
            Self::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}
