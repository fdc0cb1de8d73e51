///! Errors

use thiserror::Error;

use crate::constants::*;

/// Input validation errors.
/// The solver itself never fails, these are raised before a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Locked REFDIV outside of the hardware range
    #[error("REFDIV must be in the range {min} to {max}, got {0}", min = REFDIV_MIN, max = REFDIV_MAX)]
    InvalidRefdiv(u8),

    /// Zero, negative, non-finite or out of range frequency
    #[error("invalid frequency")]
    InvalidFrequency,

    /// VCO floor is not below the VCO ceiling
    #[error("VCO minimum must be below VCO maximum")]
    InvalidVcoRange,
}
