use super::score::Score;
use super::scorer::Scorer;
use crate::cards::card::Card;
use itertools::Itertools;

/// The strongest five cards out of a larger set.
///
/// Five or fewer cards come back untouched. Otherwise every 5-card subset
/// is scored and the first one reaching the maximal score wins, so the
/// result is stable for a given input order.
pub fn five_best<S: Scorer>(scorer: &S, cards: &[Card]) -> Vec<Card> {
    if cards.len() <= 5 {
        return cards.to_vec();
    }
    let mut best = (Score::default(), Vec::new());
    for subset in cards.iter().copied().combinations(5) {
        let score = scorer.score_cards(&subset);
        if score > best.0 || best.1.is_empty() {
            best = (score, subset);
        }
    }
    best.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::score::Lookup;

    #[test]
    fn five_cards_untouched() {
        let cards = Card::parse("2c7dJhAsKs").unwrap();
        assert_eq!(five_best(&Lookup, &cards), cards);
    }

    #[test]
    fn fewer_than_five_untouched() {
        let cards = Card::parse("AsKs").unwrap();
        assert_eq!(five_best(&Lookup, &cards), cards);
    }

    #[test]
    fn finds_flush_among_eight() {
        let cards = Card::parse("AsKs2h4d6cQsJs9s").unwrap();
        let best = five_best(&Lookup, &cards);
        assert_eq!(best.len(), 5);
        assert_eq!(Hand::from(best), Hand::try_from("AsKsQsJs9s").unwrap());
    }

    #[test]
    fn finds_quads_over_board() {
        let cards = Card::parse("8c8s8d8hAcKdQh").unwrap();
        let best = five_best(&Lookup, &cards);
        assert_eq!(Hand::from(best), Hand::try_from("8c8s8d8hAc").unwrap());
    }

    #[test]
    fn matches_whole_hand_score() {
        let cards = Card::parse("Th9h8h7d6c2s3s").unwrap();
        let best = five_best(&Lookup, &cards);
        assert_eq!(Lookup.score_cards(&best), Lookup.score_cards(&cards));
    }
}
