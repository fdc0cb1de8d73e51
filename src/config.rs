///! Search configuration

use crate::{ constants::*, errors::*, refin::* };


/// Which end of the VCO window to favour among equally good settings.
///
/// A higher VCO frequency reduces the relative jitter of the loop,
/// a lower one draws less power.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default)]
pub enum VcoPreference {
    /// FBDIV is searched from the top down
    #[default]
    High,
    /// FBDIV is searched from the bottom up
    Low,
}


/// Search constraints, all frequencies in Hz.
///
/// Defaults to a 12MHz crystal, 5MHz minimum reference,
/// 750..1600MHz VCO window and no output target.
///
/// ```
/// use pll_calc::config::*;
///
/// let c = SearchConstraints::default()
///     .target_hz(125_000_000)
///     .vco_preference(VcoPreference::Low)
///     .validate()
///     .unwrap();
/// assert_eq!(c.input_hz, 12_000_000);
/// ```
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct SearchConstraints {
    pub input_hz: u64,
    pub ref_min_hz: u64,
    pub vco_min_hz: u64,
    pub vco_max_hz: u64,
    pub target_hz: u64,
    pub vco_preference: VcoPreference,
    pub locked_refdiv: Option<u8>,
}

impl Default for SearchConstraints {
    fn default() -> Self {
        SearchConstraints {
            input_hz: DEFAULT_INPUT_FREQ,
            ref_min_hz: DEFAULT_REF_FREQ_MIN,
            vco_min_hz: DEFAULT_VCO_FREQ_MIN,
            vco_max_hz: DEFAULT_VCO_FREQ_MAX,
            target_hz: 0,
            vco_preference: VcoPreference::default(),
            locked_refdiv: None,
        }
    }
}

impl SearchConstraints {

    /// Input (reference) frequency
    pub fn input_hz(mut self: Self, f: u64) -> Self {
        self.input_hz = f;
        self
    }

    /// Minimum reference frequency after REFDIV
    pub fn ref_min_hz(mut self: Self, f: u64) -> Self {
        self.ref_min_hz = f;
        self
    }

    /// Allowed VCO window, inclusive
    pub fn vco_range_hz(mut self: Self, min: u64, max: u64) -> Self {
        self.vco_min_hz = min;
        self.vco_max_hz = max;
        self
    }

    /// Requested output frequency
    pub fn target_hz(mut self: Self, f: u64) -> Self {
        self.target_hz = f;
        self
    }

    pub fn vco_preference(mut self: Self, p: VcoPreference) -> Self {
        self.vco_preference = p;
        self
    }

    /// Restrict the search to a single REFDIV
    pub fn lock_refdiv(mut self: Self, refdiv: u8) -> Self {
        self.locked_refdiv = Some(refdiv);
        self
    }

    /// Input reference config
    pub fn refin(self: &Self) -> RefIn {
        RefIn::new(self.input_hz, self.ref_min_hz)
    }

    /// Caller side checks, `solve` assumes these hold but never runs them.
    pub fn validate(self: Self) -> Result<Self, Error> {
        if let Some(r) = self.locked_refdiv {
            (if !(REFDIV_MIN ..= REFDIV_MAX).contains(&r) { Err(Error::InvalidRefdiv(r)) } else { Ok(()) })?;
        }

        let freqs = [self.input_hz, self.ref_min_hz, self.vco_min_hz, self.vco_max_hz, self.target_hz];
        (if freqs.contains(&0) { Err(Error::InvalidFrequency) } else { Ok(()) })?;

        (if self.vco_min_hz >= self.vco_max_hz { Err(Error::InvalidVcoRange) } else { Ok(()) })?;

        Ok(self)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SearchConstraints {
        SearchConstraints::default().target_hz(125_000_000)
    }

    #[test]
    fn test_defaults() {
        let c = SearchConstraints::default();
        assert_eq!(c.input_hz, 12_000_000);
        assert_eq!(c.ref_min_hz, 5_000_000);
        assert_eq!((c.vco_min_hz, c.vco_max_hz), (750_000_000, 1_600_000_000));
        assert_eq!(c.vco_preference, VcoPreference::High);
        assert_eq!(c.locked_refdiv, None);
    }

    #[test]
    fn test_validate_accepts_defaults_with_target() {
        assert_eq!(base().validate(), Ok(base()));
    }

    #[test]
    fn test_validate_refdiv_bounds() {
        assert_eq!(base().lock_refdiv(0).validate(), Err(Error::InvalidRefdiv(0)));
        assert_eq!(base().lock_refdiv(64).validate(), Err(Error::InvalidRefdiv(64)));
        assert!(base().lock_refdiv(1).validate().is_ok());
        assert!(base().lock_refdiv(63).validate().is_ok());
    }

    #[test]
    fn test_validate_frequencies() {
        assert_eq!(SearchConstraints::default().validate(), Err(Error::InvalidFrequency));
        assert_eq!(base().input_hz(0).validate(), Err(Error::InvalidFrequency));
        assert_eq!(base().ref_min_hz(0).validate(), Err(Error::InvalidFrequency));
    }

    #[test]
    fn test_validate_vco_range() {
        assert_eq!(base().vco_range_hz(1_000_000_000, 1_000_000_000).validate(), Err(Error::InvalidVcoRange));
        assert_eq!(base().vco_range_hz(1_600_000_000, 750_000_000).validate(), Err(Error::InvalidVcoRange));
    }

    #[test]
    fn test_refin_follows_constraints() {
        let c = base().input_hz(25_000_000).ref_min_hz(5_000_000);
        assert_eq!(c.refin().max_refdiv(), 5);
    }
}
