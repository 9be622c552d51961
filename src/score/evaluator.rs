use super::category::Category;
use super::lookup;
use super::score::Score;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// A lazy evaluator for a hand's score.
///
/// Using a compact representation of the Hand, we search for the
/// strongest category top-down with bitwise operations, then place the
/// best five cards within that category's band. Hands of five or fewer
/// cards are scored as they stand.
pub struct Evaluator {
    hand: Hand,
    counts: [u8; 13],
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let bits = u64::from(hand);
        let counts = Rank::all().map(|r| (bits & u64::from(r)).count_ones() as u8);
        Self { hand, counts }
    }
}

impl Evaluator {
    pub fn score(&self) -> Score {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    /// ranks held at least `n` times
    fn ranks_with(&self, n: u8) -> u16 {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c >= n)
            .fold(0u16, |mask, (r, _)| mask | 1 << r)
    }
    /// rank masks of every suit holding five or more cards
    fn flush_suits(&self) -> impl Iterator<Item = u16> + '_ {
        Suit::all()
            .into_iter()
            .map(|s| self.hand.of(&s))
            .filter(|h| h.size() >= 5)
            .map(u16::from)
    }

    fn band(category: Category, offset: u16) -> Score {
        Score::from(category.floor() + 1 + offset)
    }

    fn find_straight_flush(&self) -> Option<Score> {
        self.flush_suits()
            .filter_map(lookup::highest_straight)
            .max()
            .map(|hi| Self::band(Category::StraightFlush, hi as u16 - 3))
    }
    fn find_4_oak(&self) -> Option<Score> {
        let quad = lookup::highest(self.ranks_with(4))?;
        let kick = lookup::highest(self.ranks_with(1) & !(1 << quad));
        let slot = kick.map(|k| 1 + Self::skip(k, quad)).unwrap_or(0);
        Some(Self::band(
            Category::FourOfAKind,
            quad as u16 * crate::RANK_COUNT + slot,
        ))
    }
    fn find_3_oak_2_oak(&self) -> Option<Score> {
        let trip = lookup::highest(self.ranks_with(3))?;
        let pair = lookup::highest(self.ranks_with(2) & !(1 << trip))?;
        Some(Self::band(
            Category::FullHouse,
            trip as u16 * (crate::RANK_COUNT - 1) + Self::skip(pair, trip),
        ))
    }
    fn find_flush(&self) -> Option<Score> {
        let tables = lookup::tables();
        self.flush_suits()
            .map(|ranks| lookup::top(ranks, 5))
            .filter_map(|ranks| tables.distinct.get(&ranks).copied())
            .max()
            .map(|i| Self::band(Category::Flush, i))
    }
    fn find_straight(&self) -> Option<Score> {
        lookup::highest_straight(self.ranks_with(1))
            .map(|hi| Self::band(Category::Straight, hi as u16 - 3))
    }
    fn find_3_oak(&self) -> Option<Score> {
        let trip = lookup::highest(self.ranks_with(3))?;
        let kicks = lookup::top(self.ranks_with(1) & !(1 << trip), 2);
        let kicks = lookup::compress(kicks, trip);
        let index = lookup::tables().kick2.get(&kicks).copied()?;
        Some(Self::band(
            Category::ThreeOfAKind,
            trip as u16 * TRIPS_KICKS + index,
        ))
    }
    fn find_2_oak_2_oak(&self) -> Option<Score> {
        let pairs = self.ranks_with(2);
        let hi = lookup::highest(pairs)?;
        let lo = lookup::highest(pairs & !(1 << hi))?;
        let kick = lookup::highest(self.ranks_with(1) & !(1 << hi) & !(1 << lo));
        let slot = kick
            .map(|k| 1 + Self::skip(Self::skip(k, hi) as u8, lo))
            .unwrap_or(0);
        let hi = hi as u16;
        let lo = lo as u16;
        Some(Self::band(
            Category::TwoPair,
            (hi * (hi - 1) / 2 + lo) * (crate::RANK_COUNT - 1) + slot,
        ))
    }
    fn find_2_oak(&self) -> Option<Score> {
        let pair = lookup::highest(self.ranks_with(2))?;
        let kicks = lookup::top(self.ranks_with(1) & !(1 << pair), 3);
        let kicks = lookup::compress(kicks, pair);
        let index = lookup::tables().kick3.get(&kicks).copied()?;
        Some(Self::band(Category::Pair, pair as u16 * PAIR_KICKS + index))
    }
    fn find_1_oak(&self) -> Score {
        let ranks = lookup::top(self.ranks_with(1), 5);
        let index = lookup::tables()
            .distinct
            .get(&ranks)
            .copied()
            .unwrap_or_default();
        Self::band(Category::HighCard, index)
    }

    /// position of `rank` among the twelve ranks that are not `taken`
    fn skip(rank: u8, taken: u8) -> u16 {
        match rank > taken {
            true => rank as u16 - 1,
            false => rank as u16,
        }
    }
}

/// kicker combinations behind one pair: 0..=3 of the other 12 ranks
const PAIR_KICKS: u16 = 1 + 12 + 66 + 220;
/// kicker combinations behind one set: 0..=2 of the other 12 ranks
const TRIPS_KICKS: u16 = 1 + 12 + 66;

#[cfg(test)]
mod tests {
    use super::*;

    fn score(s: &str) -> Score {
        Evaluator::from(Hand::try_from(s).unwrap()).score()
    }
    fn category(s: &str) -> Option<Category> {
        score(s).category()
    }

    #[test]
    fn high_card() {
        assert_eq!(category("As Kh Qd Jc 9s"), Some(Category::HighCard));
        assert_eq!(u16::from(score("2c")), 4098);
        assert_eq!(u16::from(score("")), 4097);
    }

    #[test]
    fn one_pair() {
        assert_eq!(category("As Ah Kd Qc Js"), Some(Category::Pair));
        assert_eq!(u16::from(score("2s 2h")), 8193);
        assert_eq!(u16::from(score("As Ah")), 11781);
    }

    #[test]
    fn two_pair() {
        assert_eq!(category("As Ah Kd Kc Qs"), Some(Category::TwoPair));
        assert_eq!(u16::from(score("3s 3h 2d 2c")), 12289);
    }

    #[test]
    fn three_oak() {
        assert_eq!(category("As Ah Ad Kc Qs"), Some(Category::ThreeOfAKind));
    }

    #[test]
    fn straight() {
        assert_eq!(u16::from(score("Ts Jh Qd Kc As")), 20480 + 1 + 9);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(u16::from(score("As 2h 3d 4c 5s")), 20480 + 1);
    }

    #[test]
    fn flush() {
        assert_eq!(category("As Ks Qs Js 9s"), Some(Category::Flush));
        assert_eq!(u16::from(score("7s 5s 4s 3s 2s")), 24623);
        assert_eq!(u16::from(score("As 6s 4s 3s 2s")), 26177);
    }

    #[test]
    fn full_house() {
        assert_eq!(category("2s 2h 2d 3c 3s"), Some(Category::FullHouse));
        assert_eq!(u16::from(score("6s 6c 6h 7h 7d")), 28672 + 1 + 4 * 12 + 4);
    }

    #[test]
    fn four_oak() {
        assert_eq!(category("As Ah Ad Ac Ks"), Some(Category::FourOfAKind));
        assert_eq!(u16::from(score("As Ah Ad Ac")), 32768 + 1 + 12 * 13);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(u16::from(score("Ts Js Qs Ks As")), 36864 + 1 + 9);
        assert_eq!(u16::from(score("As 2s 3s 4s 5s")), 36864 + 1);
    }

    #[test]
    fn seven_card_hand() {
        assert_eq!(score("As Ah Kd Kc Qs Jh 9d"), score("As Ah Kd Kc Qs"));
    }

    #[test]
    fn flush_over_straight() {
        assert_eq!(score("4h 6h 7h 8h 9h Ts"), score("4h 6h 7h 8h 9h"));
    }

    #[test]
    fn full_house_over_flush() {
        assert_eq!(score("Kh Ah Ad As Ks Qs Js 9s"), score("Kh Ah Ad As Ks"));
    }

    #[test]
    fn four_oak_over_full_house() {
        assert_eq!(score("As Ah Ad Ac Ks Kh Qd"), score("As Ah Ad Ac Ks"));
    }

    #[test]
    fn straight_flush_over_four_oak() {
        assert_eq!(score("Ts Js Qs Ks As Ah Ad Ac"), score("Ts Js Qs Ks As"));
    }

    #[test]
    fn low_straight() {
        assert_eq!(score("As 2s 3h 4d 5c 6s"), score("2s 3h 4d 5c 6s"));
    }

    #[test]
    fn three_pair() {
        assert_eq!(score("As Ah Kd Kc Qs Qh Jd"), score("As Ah Kd Kc Qs"));
    }

    #[test]
    fn two_three_oak() {
        assert_eq!(score("As Ah Ad Kc Ks Kh Qd"), score("As Ah Ad Kc Ks"));
    }

    #[test]
    fn more_kickers_beat_fewer() {
        assert!(score("As Ah") < score("As Ah 2c"));
        assert!(score("As Ah 2c") < score("As Ah 3c"));
        assert!(score("Ac Kd") < score("Ac Kd 2h"));
    }

    #[test]
    fn categories_are_ordered() {
        let ladder = [
            "As Kh Qd Jc 9s",
            "2s 2h 3d 4c 5h 7s",
            "2s 2h 3d 3c 4h",
            "2s 2h 2d 3c 4h",
            "As 2h 3d 4c 5s",
            "7s 5s 4s 3s 2s",
            "2s 2h 2d 3c 3h",
            "2s 2h 2d 2c",
            "As 2s 3s 4s 5s",
        ];
        assert!(ladder.windows(2).all(|w| score(w[0]) < score(w[1])));
    }
}
