#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Integer-N PLL divider calculator.
//!
//! Searches REFDIV / FBDIV / PD1 / PD2 for the output frequency closest
//! to a requested one, keeping the VCO inside its allowed window.
//!
//! ```
//! use pll_calc::{ config::*, frequency::* };
//!
//! let c = SearchConstraints::default().target_hz(125_000_000);
//! let s = *solve(&c).settings().unwrap();
//! assert_eq!((s.refdiv, s.fbdiv, s.pd1, s.pd2), (1, 125, 6, 2));
//! ```

pub mod constants;
pub mod errors;
pub mod refin;
pub mod config;
pub mod frequency;
pub mod report;
