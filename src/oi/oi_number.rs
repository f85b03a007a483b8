use std::fmt;

use tracing::trace;

use crate::oi::clamp::{VSN, to_oi, try_to_oi};
use crate::oi::{ClampPolicy, OiError};

/// A number in the open unit interval, stored clamped to `[VSN, 1 - VSN]`.
///
/// Values are immutable. Every operation builds a new `OiNumber` from a
/// computed f64 that is passed back through the clamp, so results can never
/// leave the interval.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct OiNumber(f64);

impl OiNumber {
    /// Smallest representable value, `VSN`.
    pub const MIN: OiNumber = OiNumber(VSN);
    /// Largest representable value, `1 - VSN`.
    pub const MAX: OiNumber = OiNumber(1.0 - VSN);
    /// Midpoint of the interval, and the fixed point of [`invert`](OiNumber::invert).
    pub const HALF: OiNumber = OiNumber(0.5);

    /// Strict constructor. Finite values saturate onto the nearest bound,
    /// NaN and infinities are rejected.
    pub fn try_new(value: f64) -> Result<Self, OiError> {
        let clamped = try_to_oi(value)?;
        Self::trace_saturation(value, clamped);
        Ok(Self(clamped))
    }

    /// Saturating constructor used by every operation in the crate.
    ///
    /// Never fails and behaves the same in debug and release builds: finite
    /// values and infinities saturate onto the nearest bound, and NaN, which
    /// has no nearest bound, saturates onto [`MIN`](OiNumber::MIN).
    #[inline]
    pub fn new_saturating(value: f64) -> Self {
        if value.is_nan() {
            trace!("NaN saturated onto lower OI bound");
            return Self::MIN;
        }
        let clamped = to_oi(value);
        Self::trace_saturation(value, clamped);
        Self(clamped)
    }

    // Builds under an explicit policy. `Strict` is `try_new`; `Compatible`
    // is `new_saturating` and never errors.
    pub fn with_policy(value: f64, policy: ClampPolicy) -> Result<Self, OiError> {
        match policy {
            ClampPolicy::Strict => Self::try_new(value),
            ClampPolicy::Compatible => Ok(Self::new_saturating(value)),
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    fn trace_saturation(raw: f64, clamped: f64) {
        if raw != clamped {
            trace!(raw, clamped, "saturated onto OI bound");
        }
    }
}

impl fmt::Display for OiNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl TryFrom<f64> for OiNumber {
    type Error = OiError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<OiNumber> for f64 {
    fn from(n: OiNumber) -> Self {
        n.0
    }
}
