use super::evaluator::Evaluator;
use super::score::Score;
use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// Maps a set of up to seven cards to a totally ordered [`Score`].
///
/// Implementations must use the banded encoding that
/// [`Description`](super::Description) decodes: `CATEGORY_OFFSET` per
/// category, ranks numbered 0..13.
pub trait Scorer: Send + Sync {
    fn score(&self, hand: Hand) -> Score;

    fn score_cards(&self, cards: &[Card]) -> Score {
        self.score(Hand::from(cards))
    }
}

/// The built-in scorer, backed by process-wide position tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lookup;

impl Scorer for Lookup {
    fn score(&self, hand: Hand) -> Score {
        Evaluator::from(hand).score()
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, hand: Hand) -> Score {
        (**self).score(hand)
    }
}
