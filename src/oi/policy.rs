use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::oi::OiError;
use crate::oi::clamp::{to_oi, try_to_oi};

//=====================================================================
// How non-finite inputs are treated when a raw f64 is clamped.
//
//   Strict     - NaN and +/-inf are reported as `OiError`.
//   Compatible - plain comparison clamp: +/-inf saturate, NaN passes
//                through unclamped.
//
// Finite inputs behave identically under both policies.
//=====================================================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ClampPolicy {
    #[default]
    Strict,
    Compatible,
}

impl ClampPolicy {
    // Parses a policy name such as "strict" or "Compatible".
    pub fn from_name(name: &str) -> Result<Self, OiError> {
        Self::from_str(name.trim()).map_err(|_| OiError::UnknownPolicy {
            name: name.to_string(),
        })
    }
}

pub fn clamp_with(n: f64, policy: ClampPolicy) -> Result<f64, OiError> {
    match policy {
        ClampPolicy::Strict => try_to_oi(n),
        ClampPolicy::Compatible => Ok(to_oi(n)),
    }
}
