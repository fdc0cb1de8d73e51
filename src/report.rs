///! Human readable search results

use core::fmt;

use crate::{ constants::*, frequency::* };


/// Frequency in Hz, displayed as MHz without trailing zeros
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Mhz(pub u64);

impl fmt::Display for Mhz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / HZ_PER_MHZ;
        let mut frac = self.0 % HZ_PER_MHZ;
        if frac == 0 {
            return write!(f, "{}", whole);
        }

        let mut width = 6;
        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }
        write!(f, "{}.{:0width$}", whole, frac, width = width)
    }
}


/// CMake snippet for a non-default REFDIV.
/// The SDK only derives VCO and post dividers itself when REFDIV is 1.
#[derive(Debug,Copy,Clone)]
pub struct CompileDefinitions<'a> {
    /// CMake target name
    pub executable: &'a str,
    pub settings: &'a PllSettings,
}

impl fmt::Display for CompileDefinitions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.settings;
        writeln!(f, "As this requires a non-standard refdiv, this will")?;
        writeln!(f, "need to be set as a compile definition")?;
        writeln!(f, "Add the following to your CMakeLists.txt file to")?;
        writeln!(f, "configure the clocks as calculated above")?;
        writeln!(f)?;
        writeln!(f, "target_compile_definitions({} PRIVATE", self.executable)?;
        writeln!(f, "\tPLL_SYS_REFDIV={}", s.refdiv)?;
        writeln!(f, "\tPLL_SYS_VCO_FREQ_HZ={}", s.vco_hz)?;
        writeln!(f, "\tPLL_SYS_POSTDIV1={}", s.pd1)?;
        writeln!(f, "\tPLL_SYS_POSTDIV2={}", s.pd2)?;
        write!(f, ")")
    }
}


/// Full search report
#[derive(Debug,Copy,Clone)]
pub struct Report<'a> {
    /// Requested output frequency, Hz
    pub target_hz: u64,
    pub result: &'a SolverResult,
    /// CMake target name used in compile definitions
    pub executable: &'a str,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self.result {
            SolverResult::Found(s) => s,
            SolverResult::NotFound => return write!(f, "UNABLE TO COME UP WITH A SOLUTION...."),
        };

        writeln!(f, "Requested: {} MHz", Mhz(self.target_hz))?;
        writeln!(f, "Achieved: {} MHz", Mhz(s.output_hz))?;
        writeln!(f, "REFDIV: {}", s.refdiv)?;
        writeln!(f, "FBDIV: {} (VCO = {} MHz)", s.fbdiv, Mhz(s.vco_hz))?;
        writeln!(f, "PD1: {}", s.pd1)?;
        write!(f, "PD2: {}", s.pd2)?;

        if s.refdiv != REFDIV_MIN {
            write!(f, "\n\n{}", CompileDefinitions { executable: self.executable, settings: s })?;
        }
        Ok(())
    }
}
