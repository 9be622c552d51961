use super::tally::Tally;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;

/// A board-completion engine that reports win/tie counts and equity.
///
/// `start` kicks off the computation and may return before it finishes.
/// `wait` blocks until it is done and is the only synchronization point.
/// `results` is only meaningful after `wait` and is `None` when the run
/// failed. One instance serves one computation at a time.
pub trait Backend {
    /// Returns false when the computation could not be started.
    fn start(&mut self, holes: &[Hole], board: Hand, dead: Hand, exhaustive: bool) -> bool;
    fn wait(&mut self);
    fn results(&self) -> Option<&Tally>;
}
