use super::tally::Tally;
use crate::Probability;

/// One player's share of a finished backend run.
///
/// `win` and `tie` are plain frequencies over the runouts. `equity` is the
/// backend's own pot-share average, which differs from `win + tie / 2`
/// whenever more than two players split. Nothing is renormalized across
/// players.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct Equity {
    pub wins: u64,
    pub ties: u64,
    pub win: Probability,
    pub tie: Probability,
    pub equity: Probability,
}

impl Equity {
    /// Per-player percentages from a finished tally. An empty tally
    /// yields zeros rather than NaN.
    pub fn merge(tally: &Tally) -> Vec<Self> {
        let hands = tally.hands as Probability;
        let frequency = |n: u64| match tally.hands {
            0 => 0.,
            _ => n as Probability / hands,
        };
        (0..tally.players())
            .map(|i| Self {
                wins: tally.wins[i],
                ties: tally.ties[i],
                win: frequency(tally.wins[i]),
                tie: frequency(tally.ties[i]),
                equity: tally.equity[i],
            })
            .collect()
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:>6.2}%  tie {:>6.2}%  equity {:>6.2}%",
            self.win * 100.,
            self.tie * 100.,
            self.equity * 100.
        )
    }
}
