mod clamp;
mod constructors;
mod error;
mod oi_number;
mod operations;
mod policy;

pub use clamp::{VSN, nth_root, safe_sigmoid, to_oi, try_to_oi};
pub use error::OiError;
pub use oi_number::OiNumber;
pub use policy::{ClampPolicy, clamp_with};
