///! Input reference config
///! RefIn / REFDIV range

use core::ops::RangeInclusive;

use crate::constants::*;


/// Input reference frequency config
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct RefIn {
    /// Input frequency, Hz
    f: u64,
    /// Lowest acceptable frequency after REFDIV, Hz
    f_min: u64,
}

impl RefIn {

    /// Configure reference input frequency.
    /// No range checks, see `SearchConstraints::validate`.
    pub fn new(f: u64, f_min: u64) -> Self {
        RefIn { f, f_min }
    }

    /// Largest REFDIV that keeps the divided reference at or above `f_min`,
    /// clamped to the hardware range.
    /// A zero `f_min` does not limit the divider.
    pub fn max_refdiv(self: &Self) -> u8 {
        let r = self.f.checked_div(self.f_min).unwrap_or(u64::MAX);
        r.max(REFDIV_MIN as u64).min(REFDIV_MAX as u64) as u8
    }

    /// REFDIV values to search, in search order.
    ///
    /// A locked divider is searched alone, the caller is expected to have
    /// checked it against the hardware range already.
    pub fn refdiv_range(self: &Self, locked: Option<u8>) -> RangeInclusive<u8> {
        match locked {
            Some(r) => r ..= r,
            None => REFDIV_MIN ..= self.max_refdiv(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_refdiv_floors_ratio() {
        assert_eq!(RefIn::new(12_000_000, 5_000_000).max_refdiv(), 2);
        assert_eq!(RefIn::new(12_000_000, 4_000_000).max_refdiv(), 3);
        assert_eq!(RefIn::new(12_000_000, 12_000_000).max_refdiv(), 1);
    }

    #[test]
    fn test_max_refdiv_clamped() {
        // divided reference can't reach the floor, still search REFDIV 1
        assert_eq!(RefIn::new(12_000_000, 20_000_000).max_refdiv(), REFDIV_MIN);
        assert_eq!(RefIn::new(100_000_000, 1_000).max_refdiv(), REFDIV_MAX);
        assert_eq!(RefIn::new(12_000_000, 0).max_refdiv(), REFDIV_MAX);
    }

    #[test]
    fn test_refdiv_range() {
        let refin = RefIn::new(12_000_000, 5_000_000);
        assert_eq!(refin.refdiv_range(None), 1 ..= 2);
        assert_eq!(refin.refdiv_range(Some(63)), 63 ..= 63);
        assert_eq!(refin.refdiv_range(Some(1)).count(), 1);
    }
}
