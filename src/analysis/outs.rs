use super::standing::Standing;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::score::Score;
use crate::score::Scorer;

/// The single next cards that improve one player's standing.
///
/// Both lists are in ascending card order and never share a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Outs {
    pub win: Vec<Card>,
    pub tie: Vec<Card>,
}

impl Outs {
    pub fn is_empty(&self) -> bool {
        self.win.is_empty() && self.tie.is_empty()
    }

    /// One-card lookahead for every player at once.
    ///
    /// Only the flop and turn have a next card to look at; any other street
    /// yields empty outs. Each candidate board is scored once for all
    /// players. A player already Ahead gets nothing. A Tied player only
    /// collects cards that put them outright Ahead. A Behind player collects
    /// cards that put them Ahead, else cards that tie them for the lead.
    pub fn enumerate<S: Scorer>(
        scorer: &S,
        holes: &[Hand],
        board: Board,
        removed: Hand,
        standings: &[Standing],
    ) -> Vec<Self> {
        debug_assert!(holes.len() == standings.len());
        let mut outs = vec![Self::default(); holes.len()];
        if !board.street().has_outs() {
            return outs;
        }
        if standings.iter().all(|s| *s == Standing::Ahead) {
            return outs;
        }
        let candidates = Deck::from(removed).remaining();
        log::debug!("{:<32}{:<32}", "enumerating outs over", candidates.len());
        for card in candidates {
            let next = board.with(card);
            let scores = holes
                .iter()
                .map(|hole| scorer.score(Hand::add(next, *hole)))
                .collect::<Vec<Score>>();
            for (i, standing) in standings.iter().enumerate() {
                let after = Standing::classify(scores[i], Standing::others(&scores, i));
                match (standing, after) {
                    (Standing::Ahead, _) => {}
                    (_, Standing::Ahead) => outs[i].win.push(card),
                    (Standing::Behind, Standing::Tied) => outs[i].tie.push(card),
                    _ => {}
                }
            }
        }
        outs
    }
}
