use super::hand::Hand;

/// HandIterator walks every n-card Hand that avoids a blocked mask.
///
/// It holds a single u64 and steps to the next bit pattern with the same
/// popcount (Gosper's hack), skipping patterns that touch the mask.
/// The order is deterministic, and nothing is allocated along the way.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// C(n, k) where n counts the unblocked cards
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        (64 - 52) > self.next.leading_zeros()
    }

    /// next larger word with the same popcount
    fn permute(&self) -> u64 {
        let low = self.next | (self.next - 1);
        let carry = low + 1;
        let moved = (!low & carry) - 1;
        carry | (moved >> (1 + self.next.trailing_zeros()))
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.exhausted() || self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else if self.next == 0 {
            // the single empty hand
            self.next = u64::MAX;
            Some(Hand::empty())
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1u64 << n) - 1,
            mask: u64::from(mask),
        };
        while this.next != 0 && !this.exhausted() && this.next & this.mask > 0 {
            this.next = this.permute();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
    }

    #[test]
    fn five_choose_three_with_mask() {
        let mask = Hand::from(0b______________________11_0);
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1)));
    }

    #[test]
    fn counts_match_combinations() {
        let mask = Hand::from((1u64 << 45) - 1);
        let iter = HandIterator::from((2, mask));
        assert_eq!(iter.combinations(), 21);
        assert_eq!(HandIterator::from((2, mask)).count(), 21);
        assert_eq!(HandIterator::from((1, mask)).count(), 7);
    }

    #[test]
    fn choose_zero_yields_empty_once() {
        let mut iter = HandIterator::from((0, Hand::empty()));
        assert_eq!(iter.next(), Some(Hand::empty()));
        assert_eq!(iter.next(), None);
    }
}
