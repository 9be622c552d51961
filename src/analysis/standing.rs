use crate::score::Score;

/// Where a player stands against the strongest opponent right now.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Standing {
    Ahead,
    Tied,
    Behind,
}

impl Standing {
    /// Compare one score to the best of the others. This is a best-opponent
    /// comparison, not a ranking: three players tied at the top are all Tied
    /// and everyone below them is Behind. No opponents at all counts as Ahead.
    pub fn classify<I>(score: Score, opponents: I) -> Self
    where
        I: IntoIterator<Item = Score>,
    {
        match opponents.into_iter().max() {
            None => Self::Ahead,
            Some(best) if score > best => Self::Ahead,
            Some(best) if score == best => Self::Tied,
            Some(_) => Self::Behind,
        }
    }

    /// Classify every player against all the others.
    pub fn table(scores: &[Score]) -> Vec<Self> {
        (0..scores.len())
            .map(|i| Self::classify(scores[i], Self::others(scores, i)))
            .collect()
    }

    /// every score but the i-th
    pub(crate) fn others(scores: &[Score], i: usize) -> impl Iterator<Item = Score> + '_ {
        scores
            .iter()
            .enumerate()
            .filter(move |(j, _)| *j != i)
            .map(|(_, s)| *s)
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ahead => write!(f, "AHEAD"),
            Self::Tied => write!(f, "TIED"),
            Self::Behind => write!(f, "BEHIND"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(raw: &[u16]) -> Vec<Score> {
        raw.iter().copied().map(Score::from).collect()
    }

    #[test]
    fn unique_leader() {
        assert_eq!(
            Standing::table(&scores(&[5000, 9000, 7000])),
            vec![Standing::Behind, Standing::Ahead, Standing::Behind]
        );
    }

    #[test]
    fn three_way_tie_for_lead() {
        assert_eq!(
            Standing::table(&scores(&[9000, 9000, 100, 9000])),
            vec![Standing::Tied, Standing::Tied, Standing::Behind, Standing::Tied]
        );
    }

    #[test]
    fn never_all_behind() {
        for raw in [[1, 1], [1, 2], [2, 1]] {
            let table = Standing::table(&scores(&raw));
            assert!(table.iter().any(|s| *s != Standing::Behind));
        }
    }

    #[test]
    fn no_opponents() {
        assert_eq!(Standing::classify(Score::from(1), []), Standing::Ahead);
    }
}
