// Callers that feed their own entropy into this library should ALWAYS provide a uniform draw
// between 0.0 and 1.0, inclusive. `OiNumber::from_unit` maps that draw onto the OI range, so
// the draw itself is never clamped or rejected.
//
// During debug builds, a panic will occur if the value is outside of the range [0.0, 1.0].
// Release builds skip the check, leaving the choice of RNG protocol with the caller.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnitF64(pub f64);

impl UnitF64 {
    #[inline(always)]
    pub fn new_unchecked(val: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&val),
            "UnitF64 must be in [0.0, 1.0], got {}",
            val
        );
        UnitF64(val)
    }
}
