use rand::Rng;
use tracing::debug;

use crate::oi::clamp::{VSN, nth_root, to_oi, try_to_oi};
use crate::oi::{OiError, OiNumber};
use crate::unitf64::UnitF64;

//=====================================================================
// Named constructors.
//
// Nothing in here owns a random number generator. Callers either pass
// in the generator (`random`) or the draw itself (`from_unit`,
// `quantum`, `accuracy_curve`), so a seeded generator makes every
// result reproducible.
//=====================================================================
impl OiNumber {
    // Logistic map with slope VSN: 1 / (1 + e^(-VSN * i)).
    // Near-linear around 0 (from_i32(0) is 0.5) and saturating once |i|
    // grows past ~1.4e7.
    pub fn from_i32(i: i32) -> Self {
        Self::new_saturating(1.0 / (1.0 + (-VSN * f64::from(i)).exp()))
    }

    // Maps a uniform draw in [0, 1] onto [VSN, 1 - VSN]. A NaN draw lands on MIN.
    pub fn from_unit(draw: UnitF64) -> Self {
        Self::new_saturating(draw.0 * (1.0 - 2.0 * VSN) + VSN)
    }

    // Draws one uniform f64 in [0, 1) from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_unit(UnitF64::new_unchecked(rng.random::<f64>()))
    }

    #[cfg(feature = "thread-rng")]
    pub fn random_thread() -> Self {
        Self::random(&mut rand::rng())
    }

    /// Confidence-weighted perturbation of `expectation`.
    ///
    /// With `r = to_oi(random)` and `s = |scale|`:
    ///
    /// ```text
    /// d = 1 - (1 - r)^(1 / (2·upper·s + 1)) + r^(1 / (2·lower·s + 1))
    /// result = expectation^(1 / d)
    /// ```
    ///
    /// `d` always lies in (0, 2), so the exponent is finite and positive.
    /// `random` is caller-supplied entropy; it is clamped, not checked. A NaN
    /// draw saturates the result onto [`MIN`](OiNumber::MIN), see
    /// [`try_quantum`](OiNumber::try_quantum) to reject it instead.
    pub fn quantum(
        random: f64,
        expectation: Self,
        upper_confidence: Self,
        lower_confidence: Self,
        scale: i32,
    ) -> Self {
        let s = f64::from(scale.unsigned_abs());
        let r = to_oi(random);
        let denominator = -nth_root(1.0 - r, 2.0 * upper_confidence.value() * s + 1.0)
            + nth_root(r, 2.0 * lower_confidence.value() * s + 1.0)
            + 1.0;
        debug!(r, s, denominator, "quantum denominator");
        Self::new_saturating(expectation.value().powf(1.0 / denominator))
    }

    /// `confidence^(1 / 2r) / sqrt(confidence)` with `r = to_oi(random)`.
    ///
    /// A draw of 0.5 returns `sqrt(confidence)`, lower draws drive the result
    /// toward `VSN`, and a draw at the top of the range returns roughly
    /// `confidence` itself. A NaN draw saturates onto [`MIN`](OiNumber::MIN).
    pub fn accuracy_curve(random: f64, confidence: Self) -> Self {
        let r = to_oi(random);
        let c = confidence.value();
        Self::new_saturating(c.powf(1.0 / (2.0 * r)) * (1.0 / c.sqrt()))
    }

    // Strict `quantum`: a NaN or infinite draw is an error.
    pub fn try_quantum(
        random: f64,
        expectation: Self,
        upper_confidence: Self,
        lower_confidence: Self,
        scale: i32,
    ) -> Result<Self, OiError> {
        let r = try_to_oi(random)?;
        Ok(Self::quantum(r, expectation, upper_confidence, lower_confidence, scale))
    }

    // Strict `accuracy_curve`: a NaN or infinite draw is an error.
    pub fn try_accuracy_curve(random: f64, confidence: Self) -> Result<Self, OiError> {
        let r = try_to_oi(random)?;
        Ok(Self::accuracy_curve(r, confidence))
    }
}
