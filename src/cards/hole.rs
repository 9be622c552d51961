use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards are present.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(self.0)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(Error::DuplicateCard(a)),
            false => Ok(Self(Hand::add(Hand::from(a), Hand::from(b)))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err(Error::InvalidHoleSize(s.to_string())),
        }
    }
}

impl serde::Serialize for Hole {
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

    #[test]
    fn exactly_two_cards() {
        assert!(Hole::try_from("AhKh").is_ok());
        assert!(matches!(Hole::try_from("Ah"), Err(Error::InvalidHoleSize(_))));
        assert!(matches!(Hole::try_from("AhKhQh"), Err(Error::InvalidHoleSize(_))));
        assert!(matches!(Hole::try_from("AhAh"), Err(Error::DuplicateCard(_))));
    }

    #[test]
    fn pair_of_cards() {
        let ace = Card::try_from("Ah").unwrap();
        let king = Card::try_from("Kh").unwrap();
        let hole = Hole::try_from((ace, king)).unwrap();
        assert_eq!(Hand::from(hole).size(), 2);
        assert_eq!(hole.cards(), vec![king, ace]);
        assert!(matches!(Hole::try_from((ace, ace)), Err(Error::DuplicateCard(c)) if c == ace));
    }
}
