use super::category::Category;
use super::description::Description;
use super::score::Score;
use super::scorer::Scorer;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// Brute-force reference decoder.
///
/// Builds a real hand for every candidate rank in the score's category,
/// scores it, and keeps the highest rank whose hand does not outscore the
/// target. Slow, but it only trusts the scorer's ordering, so it is the
/// ground truth the closed forms in [`Description`] are checked against.
pub fn oracle<S: Scorer>(scorer: &S, score: Score) -> Description {
    let Some(category) = score.category() else {
        return Description::invalid();
    };
    let (high, low) = Oracle { scorer, score }.search(category);
    Description::new(score, category, Rank::from(high), Rank::from(low))
}

struct Oracle<'a, S: Scorer> {
    scorer: &'a S,
    score: Score,
}

impl<S: Scorer> Oracle<'_, S> {
    fn search(&self, category: Category) -> (u8, u8) {
        match category {
            Category::HighCard => (self.climb(0..13, |r| vec![(r, 0)]), 0),
            Category::Pair => (self.climb(0..13, |r| Self::kind(r, 2)), 0),
            Category::ThreeOfAKind => (self.climb(0..13, |r| Self::kind(r, 3)), 0),
            Category::FourOfAKind => (self.climb(0..13, |r| Self::kind(r, 4)), 0),
            Category::TwoPair => self.couple(2),
            Category::FullHouse => self.couple(3),
            Category::Straight => (self.climb(0..10, |i| Self::straight(i, false)) + 3, 0),
            Category::StraightFlush => (self.climb(0..10, |i| Self::straight(i, true)) + 3, 0),
            Category::Flush => (self.climb(5..13, Self::flush).max(5), 0),
        }
    }

    /// Highest candidate whose hand scores at or below the target,
    /// stopping at the first that overshoots. Falls back to zero.
    fn climb<I, F>(&self, candidates: I, build: F) -> u8
    where
        I: Iterator<Item = u8>,
        F: Fn(u8) -> Vec<(u8, u8)>,
    {
        let mut best = 0;
        for candidate in candidates {
            if self.test(build(candidate)) > self.score {
                break;
            }
            best = candidate;
        }
        best
    }

    /// main group of `n` then a pair beside it: two pair or full house
    fn couple(&self, n: u8) -> (u8, u8) {
        let main = self.climb(1..13, |r| [Self::kind(r, n), Self::kind(0, 2)].concat());
        let side = self.climb((0..13).filter(|r| *r != main), |r| {
            [Self::kind(main, n), Self::kind(r, 2)].concat()
        });
        (main, side)
    }

    fn test(&self, cards: Vec<(u8, u8)>) -> Score {
        let hand = cards
            .into_iter()
            .map(|(rank, suit)| Card::from((Rank::from(rank), Suit::from(suit))))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::union);
        self.scorer.score(hand)
    }

    fn kind(rank: u8, n: u8) -> Vec<(u8, u8)> {
        (0..n).map(|suit| (rank, suit)).collect()
    }
    /// the i-th straight from the wheel up, suited or not
    fn straight(i: u8, suited: bool) -> Vec<(u8, u8)> {
        let suit = |k: u8| if suited { 0 } else { k % 4 };
        match i {
            0 => std::iter::once((12, if suited { 0 } else { 1 }))
                .chain((0..4).map(|k| (k, suit(k))))
                .collect(),
            _ => (0..5).map(|k| (i - 1 + k, suit(k))).collect(),
        }
    }
    /// the weakest flush with this high rank.
    /// nothing below seven-high can be a flush
    fn flush(rank: u8) -> Vec<(u8, u8)> {
        match rank {
            12 => vec![(12, 0), (0, 0), (1, 0), (2, 0), (4, 0)],
            _ => vec![(rank, 0), (0, 0), (1, 0), (2, 0), (3, 0)],
        }
    }
}
