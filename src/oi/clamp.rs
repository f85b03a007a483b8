use tracing::warn;

use crate::oi::OiError;

//=====================================================================
// Raw clamping primitives. Everything in the crate that turns an f64
// into an OI value goes through `to_oi`.
//=====================================================================

// Saturation margin. OI values live in [VSN, 1 - VSN].
pub const VSN: f64 = 1e-6;

// Projects `n` onto [VSN, 1 - VSN].
//
// This is a plain comparison clamp: a NaN input fails both comparisons and is
// returned unchanged. Use `try_to_oi` (or `ClampPolicy::Strict`) wherever NaN
// has to be caught.
#[inline]
pub fn to_oi(n: f64) -> f64 {
    if n < VSN {
        return VSN;
    }
    if n > 1.0 - VSN {
        return 1.0 - VSN;
    }
    n
}

// Strict variant of `to_oi`: NaN and infinities are reported instead of
// being passed through or saturated.
pub fn try_to_oi(n: f64) -> Result<f64, OiError> {
    if n.is_nan() {
        warn!("rejected NaN at strict OI boundary");
        return Err(OiError::NotANumber);
    }
    if n.is_infinite() {
        warn!(value = n, "rejected infinite value at strict OI boundary");
        return Err(OiError::Infinite { value: n });
    }
    Ok(to_oi(n))
}

// Clamps `n` onto the signed interval [-1 + VSN, 1 - VSN]. Returns a raw f64,
// this range is not an OI range.
#[inline]
pub fn safe_sigmoid(n: f64) -> f64 {
    if n < -1.0 + VSN {
        return -1.0 + VSN;
    }
    if n > 1.0 - VSN {
        return 1.0 - VSN;
    }
    n
}

#[inline]
pub fn nth_root(x: f64, n: f64) -> f64 {
    x.powf(1.0 / n)
}
