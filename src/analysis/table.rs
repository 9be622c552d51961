use crate::Error;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;

/// A validated snapshot: two or more hole pairs, a board, and dead cards,
/// with no card appearing twice anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    holes: Vec<Hole>,
    board: Board,
    dead: Hand,
}

impl Table {
    /// Parse and validate the string form of a snapshot.
    pub fn parse<S: AsRef<str>>(hands: &[S], board: &str, dead: &str) -> Result<Self, Error> {
        if hands.len() < 2 {
            return Err(Error::InsufficientPlayers(hands.len()));
        }
        let holes = hands
            .iter()
            .map(|h| Hole::try_from(h.as_ref()))
            .collect::<Result<Vec<Hole>, Error>>()?;
        let board = Board::try_from(board)?;
        let dead = Hand::try_from(dead)?;
        Self::new(holes, board, dead)
    }

    pub fn new(holes: Vec<Hole>, board: Board, dead: Hand) -> Result<Self, Error> {
        if holes.len() < 2 {
            return Err(Error::InsufficientPlayers(holes.len()));
        }
        holes
            .iter()
            .copied()
            .map(Hand::from)
            .chain([Hand::from(board), dead])
            .try_fold(Hand::empty(), |seen, hand| {
                match Hand::from(u64::from(seen) & u64::from(hand)).next() {
                    Some(card) => Err(Error::DuplicateCard(card)),
                    None => Ok(Hand::add(seen, hand)),
                }
            })?;
        Ok(Self { holes, board, dead })
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn hands(&self) -> Vec<Hand> {
        self.holes.iter().copied().map(Hand::from).collect()
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn dead(&self) -> Hand {
        self.dead
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    /// every card out of the deck: holes, board, and dead
    pub fn removed(&self) -> Hand {
        self.hands()
            .into_iter()
            .fold(Hand::union(Hand::from(self.board), self.dead), Hand::union)
    }
}
