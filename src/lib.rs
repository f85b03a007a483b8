//! Numbers in the open unit interval (0, 1).
//!
//! [`OiNumber`] stores an f64 clamped to `[VSN, 1 - VSN]` and provides a set of
//! operations (scaling, inversion, sigmoid pushes, growth and decay curves,
//! confidence-weighted perturbation) whose results are always re-clamped, so
//! downstream formulas such as logits never see an exact 0 or 1.
//!
//! Randomness is always supplied by the caller, either as a generator passed to
//! [`OiNumber::random`] or as a raw draw passed to [`OiNumber::quantum`] and
//! [`OiNumber::accuracy_curve`].

mod oi;
pub mod raw;
mod unitf64;

#[cfg(test)]
mod utils;

pub use oi::{ClampPolicy, OiError, OiNumber, VSN, clamp_with, nth_root, safe_sigmoid, to_oi, try_to_oi};
pub use unitf64::UnitF64;
