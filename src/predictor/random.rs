use rand::Rng;

/// Source of the two random draws a prediction makes: form noise and the
/// scoreline pick.
///
/// Any [`rand::Rng`] is a `RandomSource`, so production code passes
/// `rand::thread_rng()` (or a seeded `StdRng`) and tests pass a stub.
pub trait RandomSource {
    /// Continuous uniform draw in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Returns the same values on every draw.
///
/// A form value of 6.5 sits inside both form ranges ([5,7] and [6,9]), so it
/// cancels the form term whatever the two team strengths are.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedDraws {
    pub form: f64,
    pub pick: usize,
}

#[cfg(test)]
impl FixedDraws {
    pub const NEUTRAL_FORM: f64 = 6.5;

    pub fn neutral() -> Self {
        FixedDraws {
            form: Self::NEUTRAL_FORM,
            pick: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for FixedDraws {
    fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
        self.form
    }

    fn index(&mut self, len: usize) -> usize {
        self.pick.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform(5.0, 7.0);
            assert!((5.0..=7.0).contains(&v), "out of range: {v}");
            assert!(rng.index(3) < 3);
        }
    }

    #[test]
    fn fixed_draws_clamp_pick_to_len() {
        let mut draws = FixedDraws { form: 6.5, pick: 9 };
        assert_eq!(draws.index(2), 1);
        assert_eq!(draws.uniform(6.0, 9.0), 6.5);
    }
}
