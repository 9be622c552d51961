use crate::Error;

/// The stage of the hand, inferred purely from how many board cards are showing.
///
/// Only Flop and Turn have a next single card worth looking ahead to, so those
/// are the only streets where outs are enumerated. Preflop still needs three
/// cards before a one-card lookahead means anything, and the river has none left.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default, serde::Serialize)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::Rive => "River",
        }
    }
    /// Board cards showing on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Board cards still to come before showdown.
    pub const fn n_pending(&self) -> usize {
        5 - self.n_observed()
    }
    /// Whether a one-card lookahead is defined here.
    pub const fn has_outs(&self) -> bool {
        matches!(self, Self::Flop | Self::Turn)
    }
}

/// board card count -> Street
impl TryFrom<usize> for Street {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            n => Err(Error::InvalidBoardSize(n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
