use super::outs::Outs;
use super::player::PlayerResult;
use super::settings::Settings;
use super::standing::Standing;
use super::table::Table;
use crate::Error;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::equity::Backend;
use crate::equity::Enumerator;
use crate::equity::Equity;
use crate::score::Description;
use crate::score::Lookup;
use crate::score::Score;
use crate::score::Scorer;

/// Scores, standings, and one-card outs for a table, before any equity.
struct Snapshot {
    scores: Vec<Score>,
    standings: Vec<Standing>,
}

/// Orchestrates one analysis per call.
///
/// Every call to [`Analyzer::evaluate`] builds its own backend from the
/// factory, starts it, does the scoring and outs work while the backend
/// runs, then waits and merges. Nothing is shared between calls, so one
/// analyzer can serve many threads.
///
/// When the backend cannot deliver, the default analyzer degrades: scores
/// and standings are kept, outs and equity are left empty, and a warning
/// is logged. A [`strict`](Analyzer::strict) analyzer returns
/// [`Error::BackendUnavailable`] instead.
pub struct Analyzer<S = Lookup, B = Enumerator> {
    scorer: S,
    settings: Settings,
    strict: bool,
    backend: fn(&Settings) -> B,
}

impl Default for Analyzer<Lookup, Enumerator> {
    fn default() -> Self {
        Self::new(Lookup, |settings| Enumerator::from(settings))
    }
}

impl<S, B> Analyzer<S, B>
where
    S: Scorer,
    B: Backend,
{
    pub fn new(scorer: S, backend: fn(&Settings) -> B) -> Self {
        Self {
            scorer,
            settings: Settings::default(),
            strict: false,
            backend,
        }
    }
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
    /// propagate backend failures instead of degrading
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// The single entry point: parse, validate, and analyze a snapshot.
    pub fn evaluate<H: AsRef<str>>(
        &self,
        hands: &[H],
        board: &str,
        dead: &str,
    ) -> Result<Vec<PlayerResult>, Error> {
        self.analyze(&Table::parse(hands, board, dead)?)
    }

    pub fn analyze(&self, table: &Table) -> Result<Vec<PlayerResult>, Error> {
        log::debug!("{:<32}{:<32}", "analyzing street", table.street());
        let ref mut backend = (self.backend)(&self.settings);
        let started = backend.start(
            table.holes(),
            Hand::from(table.board()),
            table.dead(),
            self.settings.exhaustive,
        );
        if !started {
            self.unavailable("equity backend refused to start")?;
        }
        let snapshot = self.snapshot(table);
        let outs = match started {
            true => self.outs(table, &snapshot),
            false => vec![Outs::default(); table.holes().len()],
        };
        let players = table
            .holes()
            .iter()
            .zip(snapshot.scores.iter().zip(snapshot.standings.iter()))
            .map(|(hole, (score, standing))| PlayerResult::new(*hole, *score, *standing))
            .collect::<Vec<PlayerResult>>();
        if !started {
            return Ok(players);
        }
        backend.wait();
        match backend.results() {
            Some(tally) if tally.players() == players.len() => Ok(players
                .into_iter()
                .zip(outs)
                .zip(Equity::merge(tally))
                .map(|((player, outs), equity)| player.with_outs(outs).with_equity(equity))
                .collect()),
            _ => {
                self.unavailable("equity backend produced no results")?;
                Ok(players)
            }
        }
    }

    /// Standalone score decoder.
    pub fn decode(&self, score: u16) -> Description {
        crate::score::decode(score)
    }

    /// Whether the first hand is strictly ahead of all the others right now.
    pub fn is_winning(&self, hand: &str, others: &[&str], board: &str) -> Result<bool, Error> {
        let table = Self::table(hand, others, board)?;
        Ok(self.snapshot(&table).standings[0] == Standing::Ahead)
    }

    /// The next cards that would put the first hand outright ahead.
    pub fn winning_outs(&self, hand: &str, others: &[&str], board: &str) -> Result<Vec<Card>, Error> {
        let table = Self::table(hand, others, board)?;
        let snapshot = self.snapshot(&table);
        Ok(self
            .outs(&table, &snapshot)
            .into_iter()
            .next()
            .map(|outs| outs.win)
            .unwrap_or_default())
    }

    /// The strongest five cards from a hole pair and a board.
    pub fn best_hand(&self, hole: &str, board: &str) -> Result<Vec<Card>, Error> {
        let hole = Hole::try_from(hole)?;
        let board = Board::try_from(board)?;
        let cards = Hand::add(Hand::from(hole), Hand::from(board));
        Ok(crate::score::five_best(&self.scorer, &Vec::<Card>::from(cards)))
    }

    /// Score and describe an arbitrary set of up to seven cards.
    pub fn score_hand(&self, cards: &str) -> Result<(Score, Description), Error> {
        let hand = Hand::try_from(cards)?;
        let score = self.scorer.score(hand);
        Ok((score, Description::from(score)))
    }

    fn snapshot(&self, table: &Table) -> Snapshot {
        let board = Hand::from(table.board());
        let scores = table
            .hands()
            .into_iter()
            .map(|hole| self.scorer.score(Hand::add(board, hole)))
            .collect::<Vec<Score>>();
        let standings = Standing::table(&scores);
        Snapshot { scores, standings }
    }

    fn outs(&self, table: &Table, snapshot: &Snapshot) -> Vec<Outs> {
        Outs::enumerate(
            &self.scorer,
            &table.hands(),
            table.board(),
            table.removed(),
            &snapshot.standings,
        )
    }

    fn unavailable(&self, reason: &str) -> Result<(), Error> {
        match self.strict {
            true => Err(Error::BackendUnavailable),
            false => {
                log::warn!("{:<32}{:<32}", reason, "returning scores only");
                Ok(())
            }
        }
    }

    fn table(hand: &str, others: &[&str], board: &str) -> Result<Table, Error> {
        let hands = std::iter::once(hand)
            .chain(others.iter().copied())
            .collect::<Vec<&str>>();
        Table::parse(&hands, board, "")
    }
}
