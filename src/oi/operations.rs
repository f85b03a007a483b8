use std::ops::{Mul, Not};

use crate::oi::OiNumber;
use crate::oi::clamp::safe_sigmoid;

//=====================================================================
// Closed operations over OI values. Each one computes a raw f64 and
// rebuilds through `OiNumber::new_saturating`, which re-clamps.
//
// None of these can produce NaN from valid operands: every base lies in
// [VSN, 1 - VSN] and every exponent is finite and positive, so powf only
// ever returns a finite value (or underflows to 0.0, which saturates).
//=====================================================================
impl OiNumber {
    // 1 - v
    pub fn invert(self) -> Self {
        Self::new_saturating(1.0 - self.value())
    }

    // v * m
    pub fn scale(self, modifier: Self) -> Self {
        Self::new_saturating(self.value() * modifier.value())
    }

    // 1 - (1 - v)(1 - m)
    pub fn inverted_scale(self, modifier: Self) -> Self {
        Self::new_saturating(1.0 - ((1.0 - self.value()) * (1.0 - modifier.value())))
    }

    // v ^ (1 / (1 + safe_sigmoid(m)))
    pub fn sigmoid_push(self, modifier: Self) -> Self {
        let exponent = 1.0 / (1.0 + safe_sigmoid(modifier.value()));
        Self::new_saturating(self.value().powf(exponent))
    }

    /// `v ^ (1 / (1 - v))`.
    ///
    /// The modifier is accepted but does not take part in the computation:
    /// only the value's own inverse drives the exponent. Use [`grow_by`]
    /// for the variant where the modifier sets the exponent.
    ///
    /// [`grow_by`]: OiNumber::grow_by
    pub fn grow(self, _modifier: Self) -> Self {
        Self::new_saturating(self.value().powf(1.0 / self.invert().value()))
    }

    /// `v ^ (1 - v)`.
    ///
    /// As with [`grow`](OiNumber::grow), the modifier is ignored. See
    /// [`decay_by`](OiNumber::decay_by).
    pub fn decay(self, _modifier: Self) -> Self {
        Self::new_saturating(self.value().powf(self.invert().value()))
    }

    // v ^ (1 - m): a larger modifier pulls v harder toward 1.
    pub fn grow_by(self, modifier: Self) -> Self {
        Self::new_saturating(self.value().powf(modifier.invert().value()))
    }

    // v ^ (1 / (1 - m)): a larger modifier pulls v harder toward VSN.
    pub fn decay_by(self, modifier: Self) -> Self {
        Self::new_saturating(self.value().powf(1.0 / modifier.invert().value()))
    }
}

impl Mul for OiNumber {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.scale(rhs)
    }
}

impl Not for OiNumber {
    type Output = Self;
    fn not(self) -> Self {
        self.invert()
    }
}
