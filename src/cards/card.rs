use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Parsing
///
/// Cards parse from two-character tokens like `"As"` or `"td"`, in either
/// case. They always format in lower case, `"as"` and `"td"`.
/// Use [`Card::parse`] for a concatenated run of tokens.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses a flat string of concatenated two-character tokens.
    ///
    /// Whitespace is ignored, so `"AhKs"` and `"Ah Ks"` are equivalent.
    /// A dangling odd character is rejected rather than dropped.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<Vec<char>>()
            .chunks(2)
            .map(|pair| match pair {
                [r, s] => Ok(Self::from((Rank::try_from(*r)?, Suit::try_from(*s)?))),
                _ => Err(Error::InvalidCardToken(pair.iter().collect())),
            })
            .collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism, exactly one token
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Self::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(Error::InvalidCardToken(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
