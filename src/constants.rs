//! Constants

/// Smallest feedback divider
pub const FBDIV_MIN: u16 = 16;

/// Largest feedback divider
pub const FBDIV_MAX: u16 = 320;

/// Smallest post divider (applies to PD1 and PD2 independently)
pub const POSTDIV_MIN: u8 = 1;

/// Largest post divider (applies to PD1 and PD2 independently)
pub const POSTDIV_MAX: u8 = 7;

/// Smallest reference divider
pub const REFDIV_MIN: u8 = 1;

/// Largest reference divider
pub const REFDIV_MAX: u8 = 63;

/// Hz per kHz, the resolution of the post divider divisibility check
pub const HZ_PER_KHZ: u64 = 1_000;

/// Hz per MHz
pub const HZ_PER_MHZ: u64 = 1_000_000;

/// Default input (crystal) frequency
pub const DEFAULT_INPUT_FREQ: u64 = 12 * HZ_PER_MHZ;

/// Default minimum reference frequency after REFDIV
pub const DEFAULT_REF_FREQ_MIN: u64 = 5 * HZ_PER_MHZ;

/// Default VCO floor
pub const DEFAULT_VCO_FREQ_MIN: u64 = 750 * HZ_PER_MHZ;

/// Default VCO ceiling
pub const DEFAULT_VCO_FREQ_MAX: u64 = 1600 * HZ_PER_MHZ;
