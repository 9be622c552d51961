use super::card::Card;
use super::hand::Hand;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// The 52-card universe minus whatever has been removed from it.
///
/// Wraps a [`Hand`] of the remaining cards. Dealing in order via
/// [`Deck::deal`] is deterministic; [`Deck::draw`] samples uniformly for
/// Monte Carlo runouts. Each analysis owns its own working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn reset(&mut self) {
        *self = Self::new();
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// removing a card that is not present is a no-op
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
    pub fn remove_all(&mut self, hand: Hand) {
        self.0 = Hand::from(u64::from(self.0) & !u64::from(hand));
    }
    /// Remaining cards in ascending card order, without consuming the deck.
    pub fn remaining(&self) -> Vec<Card> {
        Vec::<Card>::from(self.0)
    }
    /// Remaining cards in a random order, without consuming the deck.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.remaining();
        cards.shuffle(rng);
        cards
    }
    /// Removes and returns the lowest remaining card.
    pub fn deal(&mut self) -> Result<Card, Error> {
        let card = self.0.next().ok_or(Error::DeckExhausted)?;
        Ok(card)
    }
    /// Removes and returns a uniformly random remaining card.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Card, Error> {
        match self.0.size() {
            0 => Err(Error::DeckExhausted),
            n => {
                let i = rng.random_range(0..n);
                let mut deck = u64::from(self.0);
                for _ in 0..i {
                    deck &= deck - 1;
                }
                let card = Card::from(deck.trailing_zeros() as u8);
                self.0.remove(card);
                Ok(card)
            }
        }
    }
}

/// the universe minus a removal set
impl From<Hand> for Deck {
    fn from(removed: Hand) -> Self {
        Self(removed.complement())
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
