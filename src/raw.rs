use rand::Rng;

use crate::oi::OiNumber;

//=====================================================================
// Value-level facade: the OI operation set over plain f64 values, for
// callers that store raw doubles rather than `OiNumber`s.
//
// Every input is clamped onto the OI range before use and every result
// is an in-range f64. Inputs follow the `OiNumber::new_saturating`
// contract: infinities saturate onto the nearest bound and NaN saturates
// onto VSN, identically in debug and release builds.
//=====================================================================

#[inline]
fn oi(n: f64) -> OiNumber {
    OiNumber::new_saturating(n)
}

// Clamps `n` onto the OI range.
pub fn constant(n: f64) -> f64 {
    oi(n).value()
}

pub fn invert(n: f64) -> f64 {
    oi(n).invert().value()
}

pub fn scale(source: f64, modifier: f64) -> f64 {
    oi(source).scale(oi(modifier)).value()
}

pub fn inverted_scale(source: f64, modifier: f64) -> f64 {
    oi(source).inverted_scale(oi(modifier)).value()
}

pub fn sigmoid_push(source: f64, modifier: f64) -> f64 {
    oi(source).sigmoid_push(oi(modifier)).value()
}

// Modifier is ignored, as in `OiNumber::grow`. Engine bindings that expose
// `Grow(source, mod)` with a modifier-driven exponent want `grow_by`.
pub fn grow(source: f64, modifier: f64) -> f64 {
    oi(source).grow(oi(modifier)).value()
}

// Modifier is ignored, as in `OiNumber::decay`. The modifier-driven
// `Decay(source, mod)` form is `decay_by`.
pub fn decay(source: f64, modifier: f64) -> f64 {
    oi(source).decay(oi(modifier)).value()
}

// Engine `Grow(source, mod)`: source ^ (1 - modifier).
pub fn grow_by(source: f64, modifier: f64) -> f64 {
    oi(source).grow_by(oi(modifier)).value()
}

// Engine `Decay(source, mod)`: source ^ (1 / (1 - modifier)).
pub fn decay_by(source: f64, modifier: f64) -> f64 {
    oi(source).decay_by(oi(modifier)).value()
}

pub fn from_i32(i: i32) -> f64 {
    OiNumber::from_i32(i).value()
}

pub fn random<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    OiNumber::random(rng).value()
}

pub fn quantum(
    random: f64,
    expectation: f64,
    upper_confidence: f64,
    lower_confidence: f64,
    scale: i32,
) -> f64 {
    OiNumber::quantum(
        random,
        oi(expectation),
        oi(upper_confidence),
        oi(lower_confidence),
        scale,
    )
    .value()
}

pub fn accuracy_curve(random: f64, confidence: f64) -> f64 {
    OiNumber::accuracy_curve(random, oi(confidence)).value()
}
