use super::category::Category;
use super::score::Score;
use crate::RANK_COUNT;
use crate::cards::rank::Rank;

/// Lowest high-card score for each high rank, Two through Ace.
const HIGH_CARD_FLOORS: [u16; 13] = [
    4098, 4099, 4101, 4105, 4113, 4128, 4158, 4214, 4312, 4474, 4729, 5114, 5675,
];
/// Lowest pair score for each paired rank, Two through Ace.
const PAIR_FLOORS: [u16; 13] = [
    8193, 8492, 8791, 9090, 9389, 9688, 9987, 10286, 10585, 10884, 11183, 11482, 11781,
];
/// Lowest flush score for each high rank, Seven through Ace.
/// Anything lower would be forced into a straight flush.
const FLUSH_FLOORS: [u16; 8] = [24623, 24653, 24709, 24807, 24969, 25224, 25609, 26177];

/// Kicker pairs available behind a set, excluding the full houses
/// and quads that would have taken precedence.
const TRIPS_SUBCOMBINATIONS: u16 = 1 + (RANK_COUNT - 1) + (RANK_COUNT - 1) * (RANK_COUNT - 2) / 2;

/// A human reading of a [`Score`], recovered without the original cards.
///
/// `high` is the defining rank of the category: the pair, the set, the top
/// of the straight. `low` is only meaningful for two pair and full house,
/// and is Two otherwise. The invalid description (score 0, no category)
/// renders as an empty string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Description {
    score: Score,
    category: Option<Category>,
    high: Rank,
    low: Rank,
}

impl Description {
    pub fn invalid() -> Self {
        Self {
            score: Score::default(),
            category: None,
            high: Rank::Two,
            low: Rank::Two,
        }
    }
    pub fn new(score: Score, category: Category, high: Rank, low: Rank) -> Self {
        Self {
            score,
            category: Some(category),
            high,
            low,
        }
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn category(&self) -> Option<Category> {
        self.category
    }
    pub fn high(&self) -> Rank {
        self.high
    }
    pub fn low(&self) -> Rank {
        self.low
    }
    pub fn is_valid(&self) -> bool {
        self.category.is_some()
    }
    pub fn is_royal(&self) -> bool {
        self.category == Some(Category::StraightFlush) && self.high == Rank::Ace
    }
    /// every word capitalised, "Royal Flush"
    pub fn title(&self) -> String {
        self.to_string()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// highest rank whose floor does not exceed the score
    fn floor(floors: &[u16], score: u16) -> usize {
        floors
            .iter()
            .take_while(|&&floor| floor <= score)
            .count()
            .saturating_sub(1)
    }
    fn rank(n: usize) -> Rank {
        Rank::from(n.min(12) as u8)
    }
}

/// The closed-form decoder. Each band has its own arithmetic.
impl From<Score> for Description {
    fn from(score: Score) -> Self {
        let Some(category) = score.category() else {
            return Self::invalid();
        };
        let raw = u16::from(score);
        let index = score.sub_index() as usize;
        let ranks = RANK_COUNT as usize;
        let (high, low) = match category {
            Category::HighCard => (Self::floor(&HIGH_CARD_FLOORS, raw), 0),
            Category::Pair => (Self::floor(&PAIR_FLOORS, raw), 0),
            Category::TwoPair => {
                // the smallest two pair is threes and twos
                let pairs = index / (ranks - 1);
                let high = ((((8 * pairs + 1) as f64).sqrt() - 1.) / 2.) as usize;
                let low = pairs - high * (high + 1) / 2;
                (high + 1, low)
            }
            Category::ThreeOfAKind => (index / TRIPS_SUBCOMBINATIONS as usize, 0),
            Category::Straight => (index + 3, 0),
            Category::Flush => (Self::floor(&FLUSH_FLOORS, raw) + 5, 0),
            Category::FullHouse => {
                let high = index / (ranks - 1);
                let low = index % (ranks - 1);
                (high, if low >= high { low + 1 } else { low })
            }
            Category::FourOfAKind => (index / ranks, 0),
            Category::StraightFlush => (index + 3, 0),
        };
        Self::new(score, category, Self::rank(high), Self::rank(low))
    }
}

/// Decode a raw 16-bit score.
pub fn decode(score: u16) -> Description {
    Description::from(Score::from(score))
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Some(category) = self.category else {
            return Ok(());
        };
        let (high, low) = (self.high, self.low);
        match category {
            Category::HighCard => write!(f, "high card, {}", high.name()),
            Category::Pair => write!(f, "pair of {}", high.plural()),
            Category::TwoPair => write!(f, "two pair, {} and {}", high.plural(), low.plural()),
            Category::ThreeOfAKind => write!(f, "three of a kind, {}", high.plural()),
            Category::Straight => write!(f, "{}-high straight", high.name()),
            Category::Flush => write!(f, "{}-high flush", high.name()),
            Category::FullHouse => write!(f, "full house, {} full of {}", high.plural(), low.plural()),
            Category::FourOfAKind => write!(f, "four of a kind, {}", high.plural()),
            Category::StraightFlush if self.is_royal() => write!(f, "royal flush"),
            Category::StraightFlush => write!(f, "{}-high straight flush", high.name()),
        }
    }
}

impl serde::Serialize for Description {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::score::Lookup;
    use crate::score::Scorer;

    fn describe(cards: &str) -> Description {
        Description::from(Lookup.score(Hand::try_from(cards).unwrap()))
    }

    #[test]
    fn phrases() {
        assert_eq!(describe("AsKh9d7c2s").to_string(), "high card, ace");
        assert_eq!(describe("AsAh9d7c2s").to_string(), "pair of aces");
        assert_eq!(describe("AsAhKdKc2s").to_string(), "two pair, aces and kings");
        assert_eq!(describe("7s7h7dKc2s").to_string(), "three of a kind, sevens");
        assert_eq!(describe("6s7h8d9cTs").to_string(), "ten-high straight");
        assert_eq!(describe("As9s7s5s3s").to_string(), "ace-high flush");
        assert_eq!(describe("6s6c6h7h7d").to_string(), "full house, sixes full of sevens");
        assert_eq!(describe("8s8h8d8cAs").to_string(), "four of a kind, eights");
        assert_eq!(describe("5h6h7h8h9h").to_string(), "nine-high straight flush");
        assert_eq!(describe("ThJhQhKhAh").to_string(), "royal flush");
    }

    #[test]
    fn wheel_is_five_high() {
        let wheel = describe("As2h3d4c5s");
        assert_eq!(wheel.category(), Some(Category::Straight));
        assert_eq!(wheel.high(), Rank::Five);
        let steel = describe("As2s3s4s5s");
        assert_eq!(steel.category(), Some(Category::StraightFlush));
        assert_eq!(steel.high(), Rank::Five);
        assert!(!steel.is_royal());
    }

    #[test]
    fn royal_flush() {
        let royal = describe("AhKhQhJhTh");
        assert!(royal.is_royal());
        assert_eq!(royal.high(), Rank::Ace);
        assert_eq!(royal.title(), "Royal Flush");
        assert_eq!(describe("6s6c6h7h7d").title(), "Full House, Sixes Full Of Sevens");
    }

    #[test]
    fn seven_cards_describe_best_five() {
        assert_eq!(describe("8c8s8d8hAcKdQh").to_string(), "four of a kind, eights");
        assert_eq!(describe("AsKs2h4d6cQsJs9s").to_string(), "ace-high flush");
    }

    #[test]
    fn low_card_only_where_meaningful() {
        let two_pair = describe("9s9hQdQc2s");
        assert_eq!((two_pair.high(), two_pair.low()), (Rank::Queen, Rank::Nine));
        let boat = describe("2s2h2dAcAs");
        assert_eq!((boat.high(), boat.low()), (Rank::Two, Rank::Ace));
        let pair = describe("9s9hQd3c2s");
        assert_eq!(pair.low(), Rank::Two);
    }

    #[test]
    fn invalid_sentinel() {
        for raw in [0u16, 1, 4095, 40960, u16::MAX] {
            let description = decode(raw);
            assert!(!description.is_valid());
            assert_eq!(u16::from(description.score()), 0);
            assert_eq!(description.to_string(), "");
        }
    }

    #[test]
    fn total_over_every_band() {
        for raw in 4096..40960u16 {
            assert!(decode(raw).is_valid());
        }
    }
}
