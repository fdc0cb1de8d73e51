///! Frequency calculations
///!
///! Exhaustive REFDIV / FBDIV / PD2 / PD1 search.
///!
///! VCO = REF IN / REFDIV × FBDIV
///! OUT = VCO / (PD1 × PD2)

use tracing::{debug, trace};

use crate::{ config::*, constants::* };


/// One feasible divider combination
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Candidate {
    /// Output frequency, Hz
    pub output_hz: u64,
    pub fbdiv: u16,
    pub pd1: u8,
    pub pd2: u8,
    pub refdiv: u8,
    /// Distance from the requested output, Hz
    pub margin_hz: u64,
}

/// Chosen PLL settings
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct PllSettings {
    /// Achieved output frequency, Hz
    pub output_hz: u64,
    pub fbdiv: u16,
    pub pd1: u8,
    pub pd2: u8,
    pub refdiv: u8,
    /// VCO frequency, Hz
    pub vco_hz: u64,
}

/// Search outcome
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum SolverResult {
    Found(PllSettings),
    /// No combination came closer to the target than the target itself
    NotFound,
}

impl SolverResult {
    pub fn settings(self: &Self) -> Option<&PllSettings> {
        match self {
            SolverResult::Found(s) => Some(s),
            SolverResult::NotFound => None,
        }
    }
}


/// FBDIV values in search order
fn fbdiv_order(p: VcoPreference) -> impl Iterator<Item = u16> + Clone {
    (0 ..= FBDIV_MAX - FBDIV_MIN).map(move |i| match p {
        VcoPreference::High => FBDIV_MAX - i,
        VcoPreference::Low => FBDIV_MIN + i,
    })
}

/// Check a single combination against the VCO window and the divisibility rule.
///
/// VCO has to land on a whole kHz that PD1 × PD2 divides, so the output is a
/// whole number of kHz as well. Done in integers:
/// REF IN × FBDIV ≡ 0 (mod REFDIV × 1000 × PD1 × PD2)
fn evaluate(
    c: &SearchConstraints,
    refdiv: u8,
    fbdiv: u16,
    pd2: u8,
    pd1: u8,
) -> Option<Candidate> {
    let r = refdiv as u128;
    // VCO × REFDIV
    let scaled_vco = c.input_hz as u128 * fbdiv as u128;
    if scaled_vco < c.vco_min_hz as u128 * r || scaled_vco > c.vco_max_hz as u128 * r {
        return None;
    }

    let pd = pd1 as u128 * pd2 as u128;
    if scaled_vco % (r * HZ_PER_KHZ as u128 * pd) != 0 {
        return None;
    }

    // bounded by the VCO ceiling
    let output_hz = (scaled_vco / (r * pd)) as u64;
    Some(Candidate {
        output_hz,
        fbdiv,
        pd1,
        pd2,
        refdiv,
        margin_hz: output_hz.abs_diff(c.target_hz),
    })
}

/// All feasible combinations in search order:
/// REFDIV ascending, FBDIV per `VcoPreference`, PD2 ascending, PD1 ascending.
///
/// PD1 is the inner loop so that among equal outputs the higher PD1:PD2
/// ratios come first.
pub fn candidates(c: &SearchConstraints) -> impl Iterator<Item = Candidate> + '_ {
    let fbdivs = fbdiv_order(c.vco_preference);
    c.refin()
        .refdiv_range(c.locked_refdiv)
        .flat_map(move |refdiv| fbdivs.clone().map(move |fbdiv| (refdiv, fbdiv)))
        .flat_map(|(refdiv, fbdiv)| {
            (POSTDIV_MIN ..= POSTDIV_MAX).flat_map(move |pd2| {
                (POSTDIV_MIN ..= POSTDIV_MAX).map(move |pd1| (refdiv, fbdiv, pd2, pd1))
            })
        })
        .filter_map(move |(refdiv, fbdiv, pd2, pd1)| evaluate(c, refdiv, fbdiv, pd2, pd1))
}

/// Finds the settings closest to `c.target_hz`.
///
/// Only a strictly smaller margin replaces the current best, the first
/// candidate visited wins a tie. A candidate has to beat a margin of
/// `target_hz` to be accepted at all.
/// Constraints are not validated here.
pub fn solve(c: &SearchConstraints) -> SolverResult {
    debug!(
        input_hz = c.input_hz,
        target_hz = c.target_hz,
        vco_min_hz = c.vco_min_hz,
        vco_max_hz = c.vco_max_hz,
        preference = ?c.vco_preference,
        locked_refdiv = ?c.locked_refdiv,
        "pll search start"
    );

    let mut best: Option<Candidate> = None;
    let mut best_margin = c.target_hz;

    for cand in candidates(c) {
        if cand.margin_hz < best_margin {
            trace!(
                output_hz = cand.output_hz,
                refdiv = cand.refdiv,
                fbdiv = cand.fbdiv,
                pd1 = cand.pd1,
                pd2 = cand.pd2,
                margin_hz = cand.margin_hz,
                "new best"
            );
            best_margin = cand.margin_hz;
            best = Some(cand);
        }
    }

    match best {
        Some(b) => {
            let settings = PllSettings {
                output_hz: b.output_hz,
                fbdiv: b.fbdiv,
                pd1: b.pd1,
                pd2: b.pd2,
                refdiv: b.refdiv,
                vco_hz: (c.input_hz as u128 * b.fbdiv as u128 / b.refdiv as u128) as u64,
            };
            debug!(?settings, margin_hz = b.margin_hz, "pll search done");
            SolverResult::Found(settings)
        }
        None => {
            debug!("pll search found no solution");
            SolverResult::NotFound
        }
    }
}
