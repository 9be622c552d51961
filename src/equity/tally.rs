use crate::Probability;
use crate::score::Score;

/// Aggregate outcome counts over a batch of board runouts.
///
/// While a batch is running `equity` holds raw pot shares. Once
/// [`Tally::normalize`] is called it holds each player's average share,
/// which is what backends hand out.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Tally {
    pub wins: Vec<u64>,
    pub ties: Vec<u64>,
    pub equity: Vec<Probability>,
    pub hands: u64,
}

impl Tally {
    pub fn new(players: usize) -> Self {
        Self {
            wins: vec![0; players],
            ties: vec![0; players],
            equity: vec![0.; players],
            hands: 0,
        }
    }
    pub fn players(&self) -> usize {
        self.wins.len()
    }

    /// Record one showdown. A unique best hand takes the whole pot;
    /// k best hands split it k ways and each counts a tie.
    pub fn absorb(&mut self, scores: &[Score]) {
        debug_assert!(scores.len() == self.players());
        let Some(best) = scores.iter().max() else {
            return;
        };
        let winners = scores.iter().filter(|s| *s == best).count();
        let share = 1. / winners as Probability;
        for (i, _) in scores.iter().enumerate().filter(|(_, s)| *s == best) {
            match winners {
                1 => self.wins[i] += 1,
                _ => self.ties[i] += 1,
            }
            self.equity[i] += share;
        }
        self.hands += 1;
    }

    /// Combine two partial batches over the same players.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert!(self.players() == other.players());
        for i in 0..self.players() {
            self.wins[i] += other.wins[i];
            self.ties[i] += other.ties[i];
            self.equity[i] += other.equity[i];
        }
        self.hands += other.hands;
        self
    }

    /// Turn accumulated pot shares into average equity per runout.
    pub fn normalize(mut self) -> Self {
        if self.hands > 0 {
            let n = self.hands as Probability;
            self.equity.iter_mut().for_each(|e| *e /= n);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(raw: &[u16]) -> Vec<Score> {
        raw.iter().copied().map(Score::from).collect()
    }

    #[test]
    fn unique_winner() {
        let mut tally = Tally::new(3);
        tally.absorb(&scores(&[5000, 9000, 7000]));
        assert_eq!(tally.wins, vec![0, 1, 0]);
        assert_eq!(tally.ties, vec![0, 0, 0]);
        assert_eq!(tally.equity, vec![0., 1., 0.]);
        assert_eq!(tally.hands, 1);
    }

    #[test]
    fn three_way_split() {
        let mut tally = Tally::new(4);
        tally.absorb(&scores(&[9000, 9000, 1, 9000]));
        assert_eq!(tally.wins, vec![0, 0, 0, 0]);
        assert_eq!(tally.ties, vec![1, 1, 0, 1]);
        assert!((tally.equity[0] - 1. / 3.).abs() < 1e-12);
        assert_eq!(tally.equity[2], 0.);
    }

    #[test]
    fn merge_then_normalize() {
        let mut a = Tally::new(2);
        a.absorb(&scores(&[2, 1]));
        let mut b = Tally::new(2);
        b.absorb(&scores(&[1, 1]));
        b.absorb(&scores(&[1, 2]));
        let tally = a.merge(b).normalize();
        assert_eq!(tally.hands, 3);
        assert_eq!(tally.wins, vec![1, 1]);
        assert_eq!(tally.ties, vec![1, 1]);
        assert!((tally.equity[0] - 0.5).abs() < 1e-12);
        assert!((tally.equity[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_normalizes_to_zero() {
        let tally = Tally::new(2).normalize();
        assert_eq!(tally.equity, vec![0., 0.]);
    }
}
