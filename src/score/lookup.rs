use std::collections::HashMap;
use std::sync::OnceLock;

/// A 0..=5 card hand of distinct ranks, as a 13-bit mask, is a straight.
pub(crate) fn is_straight(ranks: u16) -> bool {
    highest_straight(ranks).is_some()
}

/// High rank index of the best straight in a rank mask, wheel included.
pub(crate) fn highest_straight(ranks: u16) -> Option<u8> {
    const WHEEL: u16 = 0b_1000000001111;
    let mut bits = ranks;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    if bits > 0 {
        highest(bits)
    } else if WHEEL == (WHEEL & ranks) {
        Some(3)
    } else {
        None
    }
}

/// index of the most significant set bit
pub(crate) fn highest(mask: u16) -> Option<u8> {
    match mask {
        0 => None,
        m => Some((15 - m.leading_zeros()) as u8),
    }
}

/// keep only the `k` most significant set bits
pub(crate) fn top(mut mask: u16, k: u32) -> u16 {
    while mask.count_ones() > k {
        mask &= mask - 1;
    }
    mask
}

/// drop bit `skip` and close the gap, so 13-rank kicker masks
/// become 12-rank masks over "every rank but this one"
pub(crate) fn compress(mask: u16, skip: u8) -> u16 {
    let below = mask & ((1 << skip) - 1);
    let above = (mask >> (skip + 1)) << skip;
    below | above
}

/// Position tables for the kicker-ordered categories.
///
/// Each table numbers rank masks of up to `depth` distinct ranks drawn from
/// `width` ranks by a depth-first walk: the empty mask first, then each
/// highest rank in ascending order followed by its subtree of lower ranks.
/// Within one band this is exactly stronger-is-larger: fewer kickers sort
/// before more, lower kickers before higher.
pub(crate) struct Tables {
    /// up to 5 distinct ranks out of 13, straights removed.
    /// shared by high card and flush.
    pub distinct: HashMap<u16, u16>,
    /// up to 3 kickers out of the 12 ranks beside a pair
    pub kick3: HashMap<u16, u16>,
    /// up to 2 kickers out of the 12 ranks beside a set
    pub kick2: HashMap<u16, u16>,
}

impl Tables {
    fn build() -> Self {
        let distinct = Self::enumerate(13, 5, true);
        let kick3 = Self::enumerate(12, 3, false);
        let kick2 = Self::enumerate(12, 2, false);
        log::debug!(
            "{:<32}{:<32}",
            "built score tables",
            distinct.len() + kick3.len() + kick2.len()
        );
        Self {
            distinct,
            kick3,
            kick2,
        }
    }
    fn enumerate(width: u8, depth: u32, skip_straights: bool) -> HashMap<u16, u16> {
        let mut table = HashMap::new();
        let mut next = 0u16;
        Self::visit(0, width, depth, skip_straights, &mut next, &mut table);
        table
    }
    fn visit(
        mask: u16,
        end: u8,
        depth: u32,
        skip_straights: bool,
        next: &mut u16,
        table: &mut HashMap<u16, u16>,
    ) {
        table.insert(mask, *next);
        *next += 1;
        if mask.count_ones() == depth {
            return;
        }
        for rank in 0..end {
            let child = mask | 1 << rank;
            if skip_straights && child.count_ones() == 5 && is_straight(child) {
                continue;
            }
            Self::visit(child, rank, depth, skip_straights, next, table);
        }
    }
}

pub(crate) fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(Tables::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        let tables = tables();
        // sum of C(13, k) for k <= 5, minus ten straights
        assert_eq!(tables.distinct.len(), 1 + 13 + 78 + 286 + 715 + 1287 - 10);
        assert_eq!(tables.kick3.len(), 1 + 12 + 66 + 220);
        assert_eq!(tables.kick2.len(), 1 + 12 + 66);
    }

    #[test]
    fn single_rank_boundaries() {
        let tables = tables();
        let boundaries = (0..13)
            .map(|r| 4096 + 1 + tables.distinct[&(1 << r)])
            .collect::<Vec<u16>>();
        assert_eq!(
            boundaries,
            vec![4098, 4099, 4101, 4105, 4113, 4128, 4158, 4214, 4312, 4474, 4729, 5114, 5675]
        );
    }

    #[test]
    fn straights() {
        assert_eq!(highest_straight(0b_1000000001111), Some(3));
        assert_eq!(highest_straight(0b_1111100000000), Some(12));
        assert_eq!(highest_straight(0b_1111110000000), Some(12));
        assert_eq!(highest_straight(0b_1011110000000), None);
    }

    #[test]
    fn compress_closes_gap() {
        assert_eq!(compress(0b_1010, 2), 0b_110);
        assert_eq!(compress(0b_1000000000001, 12), 0b_1);
        assert_eq!(compress(0b_1000000000001, 0), 0b_100000000000);
    }

    #[test]
    fn top_bits() {
        assert_eq!(top(0b_1111111, 5), 0b_1111100);
        assert_eq!(top(0b_11, 5), 0b_11);
    }
}
