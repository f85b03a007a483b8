//=====================================================================
// Utility functions shared by the unit tests
//=====================================================================

use crate::oi::{OiNumber, VSN};

// Representative OI values: both bounds, values hugging them, and a
// spread of interior points.
pub fn sample_values() -> Vec<OiNumber> {
    [VSN, 2.0 * VSN, 1e-3, 0.1, 0.25, 0.37, 0.5, 0.63, 0.75, 0.9, 0.999, 1.0 - 2.0 * VSN, 1.0 - VSN]
        .into_iter()
        .map(OiNumber::new_saturating)
        .collect()
}

pub fn assert_in_oi_range(n: OiNumber) {
    assert!(
        (VSN..=1.0 - VSN).contains(&n.value()),
        "{} left the OI range",
        n.value()
    );
}
