use super::backend::Backend;
use super::tally::Tally;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;
use crate::score::Lookup;
use crate::score::Score;
use crate::score::Scorer;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::thread::JoinHandle;

/// runouts per sampling task, each task seeded independently
const SAMPLE_CHUNK: usize = 4096;

/// The built-in equity backend.
///
/// Runs on one background thread so the caller can keep working between
/// `start` and `wait`. Exhaustive mode walks every completion of the board
/// out of the remaining deck; sampled mode draws a fixed number of random
/// completions from a seeded generator. Either way runouts are scored in
/// parallel on the rayon pool.
pub struct Enumerator<S = Lookup> {
    scorer: S,
    trials: usize,
    seed: u64,
    worker: Option<JoinHandle<Tally>>,
    tally: Option<Tally>,
}

impl Default for Enumerator<Lookup> {
    fn default() -> Self {
        Self::new(Lookup)
    }
}

impl<S> Enumerator<S>
where
    S: Scorer + Clone + 'static,
{
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            trials: crate::MONTE_CARLO_TRIALS,
            seed: crate::MONTE_CARLO_SEED,
            worker: None,
            tally: None,
        }
    }
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    fn exhaust(scorer: S, holes: Vec<Hand>, board: Hand, removed: Hand, n: usize) -> Tally {
        HandIterator::from((n, removed))
            .par_bridge()
            .fold(
                || Tally::new(holes.len()),
                |mut tally, runout| {
                    tally.absorb(&Self::showdown(&scorer, &holes, Hand::add(board, runout)));
                    tally
                },
            )
            .reduce(|| Tally::new(holes.len()), Tally::merge)
            .normalize()
    }

    fn sample(
        scorer: S,
        holes: Vec<Hand>,
        board: Hand,
        removed: Hand,
        n: usize,
        trials: usize,
        seed: u64,
    ) -> Tally {
        let chunks = trials.div_ceil(SAMPLE_CHUNK);
        (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let ref mut rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk as u64));
                let size = SAMPLE_CHUNK.min(trials - chunk * SAMPLE_CHUNK);
                let mut tally = Tally::new(holes.len());
                for _ in 0..size {
                    let mut deck = Deck::from(removed);
                    let runout = (0..n)
                        .map(|_| deck.draw(rng))
                        .collect::<Result<Vec<Card>, crate::Error>>();
                    if let Ok(runout) = runout {
                        let board = Hand::add(board, Hand::from(runout));
                        tally.absorb(&Self::showdown(&scorer, &holes, board));
                    }
                }
                tally
            })
            .reduce(|| Tally::new(holes.len()), Tally::merge)
            .normalize()
    }

    fn showdown(scorer: &S, holes: &[Hand], board: Hand) -> Vec<Score> {
        holes
            .iter()
            .map(|hole| scorer.score(Hand::add(board, *hole)))
            .collect()
    }
}

impl<S> From<&crate::analysis::Settings> for Enumerator<S>
where
    S: Scorer + Clone + Default + 'static,
{
    fn from(settings: &crate::analysis::Settings) -> Self {
        Self::new(S::default())
            .with_trials(settings.trials)
            .with_seed(settings.seed)
    }
}

impl<S> Backend for Enumerator<S>
where
    S: Scorer + Clone + 'static,
{
    fn start(&mut self, holes: &[Hole], board: Hand, dead: Hand, exhaustive: bool) -> bool {
        if self.is_running() || holes.is_empty() {
            return false;
        }
        let holes = holes.iter().copied().map(Hand::from).collect::<Vec<Hand>>();
        let removed = holes
            .iter()
            .copied()
            .fold(Hand::union(board, dead), Hand::union);
        let n = 5usize.saturating_sub(board.size());
        let available = 52 - removed.size();
        if available < n {
            log::warn!("{:<32}{:<32}", "deck cannot complete board", available);
            return false;
        }
        let scorer = self.scorer.clone();
        let trials = self.trials;
        let seed = self.seed;
        log::info!(
            "{:<32}{:<32}",
            "starting equity enumeration",
            match exhaustive {
                true => format!("{} exhaustive runouts", choose(available, n)),
                false => format!("{} sampled runouts", trials),
            }
        );
        self.tally = None;
        self.worker = Some(std::thread::spawn(move || match exhaustive {
            true => Self::exhaust(scorer, holes, board, removed, n),
            false => Self::sample(scorer, holes, board, removed, n, trials, seed),
        }));
        true
    }

    fn wait(&mut self) {
        if let Some(worker) = self.worker.take() {
            match worker.join() {
                Ok(tally) => {
                    log::info!("{:<32}{:<32}", "finished equity enumeration", tally.hands);
                    self.tally = Some(tally);
                }
                Err(_) => {
                    log::warn!("equity worker panicked");
                    self.tally = None;
                }
            }
        }
    }

    fn results(&self) -> Option<&Tally> {
        self.tally.as_ref()
    }
}

fn choose(n: usize, k: usize) -> u64 {
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}
