//! Random number source used by the random-pick animations.

use rand_core::RngCore;

/// Source of uniformly distributed integers.
///
/// Implemented for every [`RngCore`], so any `rand`-compatible generator
/// (hardware RNG peripheral, `SmallRng`, a scripted test generator) can be
/// handed to the animator.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `lo..=hi`.
    ///
    /// Returns `lo` when `hi <= lo`.
    fn random_int(&mut self, lo: u32, hi: u32) -> u32;

    /// Returns a uniformly chosen element of `items`, or `None` when empty.
    fn random_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let last = u32::try_from(items.len()).ok()?.checked_sub(1)?;
        items.get(self.random_int(0, last) as usize)
    }
}

impl<R: RngCore> RandomSource for R {
    fn random_int(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = u64::from(hi - lo) + 1;
        lo + (u64::from(self.next_u32()) % span) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counts up from a starting value
    struct CountingRng(u32);

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.0;
            self.0 = self.0.wrapping_add(1);
            value
        }

        fn next_u64(&mut self) -> u64 {
            rand_core::impls::next_u64_via_u32(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand_core::impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn random_int_stays_within_inclusive_bounds() {
        let mut rng = CountingRng(0);
        for _ in 0..20 {
            let value = rng.random_int(3, 7);
            assert!((3..=7).contains(&value));
        }
    }

    #[test]
    fn random_int_reaches_upper_bound() {
        let mut rng = CountingRng(4);
        assert_eq!(rng.random_int(0, 4), 4);
    }

    #[test]
    fn degenerate_range_returns_lower_bound() {
        let mut rng = CountingRng(12345);
        assert_eq!(rng.random_int(9, 9), 9);
        assert_eq!(rng.random_int(9, 2), 9);
    }

    #[test]
    fn full_range_does_not_overflow() {
        let mut rng = CountingRng(u32::MAX);
        assert_eq!(rng.random_int(0, u32::MAX), u32::MAX);
    }

    #[test]
    fn choice_cycles_through_items() {
        let mut rng = CountingRng(0);
        let items = ['a', 'b', 'c'];
        assert_eq!(rng.random_choice(&items), Some(&'a'));
        assert_eq!(rng.random_choice(&items), Some(&'b'));
        assert_eq!(rng.random_choice(&items), Some(&'c'));
        assert_eq!(rng.random_choice(&items), Some(&'a'));
    }

    #[test]
    fn choice_from_empty_slice_is_none() {
        let mut rng = CountingRng(0);
        let items: [u8; 0] = [];
        assert_eq!(rng.random_choice(&items), None);
    }
}
