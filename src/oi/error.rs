/// Errors raised at strict OI boundaries.
///
/// Finite out-of-range inputs are never errors: they saturate onto the
/// nearest bound. Only values with no ordering position (NaN) or no finite
/// magnitude (infinities) are reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OiError {
    #[error("NaN cannot be converted to an OI value")]
    NotANumber,

    #[error("infinite value {value} cannot be converted to an OI value")]
    Infinite { value: f64 },

    #[error("unknown clamp policy: {name}")]
    UnknownPolicy { name: String },
}
