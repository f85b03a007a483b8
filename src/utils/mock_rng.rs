use rand::RngCore;

// Replays a fixed list of uniform draws in [0, 1).
//
// `Rng::random::<f64>()` keeps the top 53 bits of `next_u64` and scales them by 2^-53, so each
// value is stored in exactly that layout. Any value that is a multiple of 2^-53 comes back
// bit-for-bit.
pub struct MockRng {
    values: Vec<f64>,
    index: usize,
}

impl MockRng {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "MockRNG: draws must be in [0.0, 1.0)"
        );
        Self { values, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        unimplemented!("MockRNG does not support next_u32")
    }

    fn next_u64(&mut self) -> u64 {
        if self.index >= self.values.len() {
            panic!("MockRNG: Ran out of values to return");
        }
        let fraction = (self.values[self.index] * (1u64 << 53) as f64) as u64;
        self.index += 1;
        fraction << 11
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unimplemented!("MockRNG does not support fill_bytes")
    }
}

// No need to implement Rng manually since it's automatically implemented for any type that implements RngCore

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    #[test]
    fn test_mock_rng_replays_draws() {
        let mut rng = MockRng::new(vec![0.0, 0.5, 0.75]);
        assert_eq!(rng.random::<f64>(), 0.0);
        assert_eq!(rng.random::<f64>(), 0.5);
        assert_eq!(rng.random::<f64>(), 0.75);
    }

    #[test]
    #[should_panic(expected = "MockRNG: Ran out of values to return")]
    fn test_mock_rng_runs_out() {
        let mut rng = MockRng::new(vec![0.5]);
        let _ = rng.random::<f64>();
        let _ = rng.random::<f64>();
    }
}
