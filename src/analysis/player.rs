use super::outs::Outs;
use super::standing::Standing;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::equity::Equity;
use crate::score::Description;
use crate::score::Score;

/// Everything known about one player after an analysis.
///
/// `equity` is `None` when the equity backend was unavailable; score,
/// standing, and description are always present.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlayerResult {
    hole: Hole,
    score: Score,
    description: Description,
    standing: Standing,
    equity: Option<Equity>,
    outs_to_win: Vec<Card>,
    outs_to_tie: Vec<Card>,
}

impl PlayerResult {
    pub fn new(hole: Hole, score: Score, standing: Standing) -> Self {
        Self {
            hole,
            score,
            description: Description::from(score),
            standing,
            equity: None,
            outs_to_win: Vec::new(),
            outs_to_tie: Vec::new(),
        }
    }
    pub fn with_outs(mut self, outs: Outs) -> Self {
        self.outs_to_win = outs.win;
        self.outs_to_tie = outs.tie;
        self
    }
    pub fn with_equity(mut self, equity: Equity) -> Self {
        self.equity = Some(equity);
        self
    }

    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn description(&self) -> Description {
        self.description
    }
    pub fn standing(&self) -> Standing {
        self.standing
    }
    pub fn equity(&self) -> Option<Equity> {
        self.equity
    }
    pub fn outs_to_win(&self) -> &[Card] {
        &self.outs_to_win
    }
    pub fn outs_to_tie(&self) -> &[Card] {
        &self.outs_to_tie
    }
}

impl std::fmt::Display for PlayerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} {}", self.hole, self.standing)?;
        writeln!(f, "  current hand   {}", self.description)?;
        match self.equity {
            Some(equity) => writeln!(f, "  {}", equity)?,
            None => writeln!(f, "  equity unavailable")?,
        }
        for (label, outs) in [("winning outs", &self.outs_to_win), ("tying outs", &self.outs_to_tie)] {
            if !outs.is_empty() {
                writeln!(
                    f,
                    "  {:<14} ({}) {}",
                    label,
                    outs.len(),
                    outs.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(" ")
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::score::Lookup;
    use crate::score::Scorer;

    #[test]
    fn display_lists_standing_then_outs() {
        let hole = Hole::try_from("9h8h").unwrap();
        let score = Lookup.score(Hand::try_from("9h8h6h7h7d").unwrap());
        let outs = Outs {
            win: Card::parse("5hTh").unwrap(),
            tie: vec![],
        };
        let player = PlayerResult::new(hole, score, Standing::Behind).with_outs(outs);
        let text = player.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("8h9h BEHIND"));
        assert!(lines.next().is_some_and(|l| l.starts_with("  current hand")));
        assert_eq!(lines.next(), Some("  equity unavailable"));
        assert_eq!(lines.next(), Some("  winning outs   (2) 5h th"));
        assert_eq!(lines.next(), None);
    }
}
