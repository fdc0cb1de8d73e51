//! Command line arguments

use clap::Parser;

use pll_calc::{ config::*, constants::*, errors::Error };

#[derive(Parser, Debug)]
#[command(name = "vcocalc")]
#[command(about = "PLL parameter calculator")]
pub struct Args {
    /// Input (reference) frequency, MHz
    #[arg(short, long, default_value_t = 12.0)]
    pub input: f64,

    /// Override minimum reference frequency, MHz
    #[arg(long, default_value_t = 5.0)]
    pub ref_min: f64,

    /// Override maximum VCO frequency, MHz
    #[arg(long, default_value_t = 1600.0)]
    pub vco_max: f64,

    /// Override minimum VCO frequency, MHz
    #[arg(long, default_value_t = 750.0)]
    pub vco_min: f64,

    /// Lock REFDIV to specified number in the range 1 to 63
    #[arg(long)]
    pub lock_refdiv: Option<u8>,

    /// Use a lower VCO frequency when possible. This reduces power
    /// consumption, at the cost of increased jitter
    #[arg(short, long)]
    pub low_vco: bool,

    /// CMake target named in the compile definitions
    #[arg(long, default_value = "executable_name")]
    pub executable: String,

    /// Log search progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output frequency, MHz
    pub output: f64,
}

/// MHz to the nearest Hz
pub fn mhz_to_hz(mhz: f64) -> Result<u64, Error> {
    let hz = (mhz * HZ_PER_MHZ as f64).round();
    if !hz.is_finite() || hz < 1.0 || hz >= u64::MAX as f64 {
        return Err(Error::InvalidFrequency);
    }
    Ok(hz as u64)
}

impl Args {
    /// Validated search constraints
    pub fn constraints(self: &Self) -> Result<SearchConstraints, Error> {
        let preference = if self.low_vco { VcoPreference::Low } else { VcoPreference::High };

        let mut c = SearchConstraints::default()
            .input_hz(mhz_to_hz(self.input)?)
            .ref_min_hz(mhz_to_hz(self.ref_min)?)
            .vco_range_hz(mhz_to_hz(self.vco_min)?, mhz_to_hz(self.vco_max)?)
            .target_hz(mhz_to_hz(self.output)?)
            .vco_preference(preference);
        if let Some(r) = self.lock_refdiv {
            c = c.lock_refdiv(r);
        }
        c.validate()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("vcocalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_mhz_to_hz() {
        assert_eq!(mhz_to_hz(12.0), Ok(12_000_000));
        assert_eq!(mhz_to_hz(133.333), Ok(133_333_000));
        assert_eq!(mhz_to_hz(12.288), Ok(12_288_000));
        assert_eq!(mhz_to_hz(0.0), Err(Error::InvalidFrequency));
        assert_eq!(mhz_to_hz(-5.0), Err(Error::InvalidFrequency));
        assert_eq!(mhz_to_hz(f64::NAN), Err(Error::InvalidFrequency));
        assert_eq!(mhz_to_hz(f64::INFINITY), Err(Error::InvalidFrequency));
    }

    #[test]
    fn test_defaults() {
        let c = parse(&["125"]).constraints().unwrap();
        assert_eq!(c, SearchConstraints::default().target_hz(125_000_000));
    }

    #[test]
    fn test_flags() {
        let c = parse(&["-i", "25", "--ref-min", "2.5", "--vco-min", "800", "--vco-max", "1500", "-l", "48"])
            .constraints()
            .unwrap();
        assert_eq!(c.input_hz, 25_000_000);
        assert_eq!(c.ref_min_hz, 2_500_000);
        assert_eq!((c.vco_min_hz, c.vco_max_hz), (800_000_000, 1_500_000_000));
        assert_eq!(c.target_hz, 48_000_000);
        assert_eq!(c.vco_preference, VcoPreference::Low);
    }

    #[test]
    fn test_lock_refdiv_validated() {
        assert_eq!(parse(&["--lock-refdiv", "3", "125"]).constraints().unwrap().locked_refdiv, Some(3));
        assert_eq!(parse(&["--lock-refdiv", "0", "125"]).constraints(), Err(Error::InvalidRefdiv(0)));
        assert_eq!(parse(&["--lock-refdiv", "64", "125"]).constraints(), Err(Error::InvalidRefdiv(64)));
    }

    #[test]
    fn test_missing_output_rejected() {
        assert!(Args::try_parse_from(["vcocalc", "-i", "12"]).is_err());
    }

    #[test]
    fn test_bad_vco_window() {
        assert_eq!(
            parse(&["--vco-min", "1600", "--vco-max", "750", "125"]).constraints(),
            Err(Error::InvalidVcoRange)
        );
    }
}
