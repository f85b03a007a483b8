mod mock_rng;
mod testing;

pub use mock_rng::MockRng;

pub use testing::{assert_in_oi_range, sample_values};
