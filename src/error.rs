use crate::cards::card::Card;
use thiserror::Error;

/// Everything that can go wrong while analyzing a snapshot.
///
/// Parsing and validation failures abort the call. An unavailable
/// equity backend is only surfaced by strict analyzers; the default
/// analyzer degrades to score-only results instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid card token: {0}")]
    InvalidCardToken(String),

    #[error("board must have 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoardSize(usize),

    #[error("hand must have exactly two cards: {0}")]
    InvalidHoleSize(String),

    #[error("need at least two players, got {0}")]
    InsufficientPlayers(usize),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("no cards left in the deck")]
    DeckExhausted,

    #[error("equity backend unavailable")]
    BackendUnavailable,
}
