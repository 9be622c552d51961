use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::Error;

/// The community cards visible to all players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively. Any other size is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cards: Hand,
    street: Street,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cards: Hand::empty(),
            street: Street::Pref,
        }
    }
    pub fn street(&self) -> Street {
        self.street
    }
    /// the same board with one more card showing
    pub fn with(&self, card: Card) -> Hand {
        Hand::add(self.cards, Hand::from(card))
    }
}

/// Hand -> Board selects at 0, 3, 4, 5 cards
impl TryFrom<Hand> for Board {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Street::try_from(hand.size()).map(|street| Self {
            cards: hand,
            street,
        })
    }
}
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.cards
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Vec::<Card>::from(self.cards)
                .into_iter()
                .map(|c| format!("{}", c))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streets_by_size() {
        assert_eq!(Board::try_from("").unwrap().street(), Street::Pref);
        assert_eq!(Board::try_from("4d5s7h").unwrap().street(), Street::Flop);
        assert_eq!(Board::try_from("4d5s7h8c").unwrap().street(), Street::Turn);
        assert_eq!(Board::try_from("4d5s7h8c9c").unwrap().street(), Street::Rive);
    }

    #[test]
    fn rejects_partial_boards() {
        assert!(matches!(Board::try_from("4d"), Err(Error::InvalidBoardSize(1))));
        assert!(matches!(Board::try_from("4d5s"), Err(Error::InvalidBoardSize(2))));
        assert!(matches!(Board::try_from("4d5s7h8c9cTc"), Err(Error::InvalidBoardSize(6))));
    }
}
