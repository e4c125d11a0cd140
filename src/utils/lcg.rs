/// Linear congruential generator producing a reproducible sequence of floats
/// in `[0, 1)`.
///
/// `state = (state * 9301 + 49297) mod 233280`, output `state / 233280`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    pub const MULTIPLIER: i64 = 9301;
    pub const INCREMENT: i64 = 49297;
    pub const MODULUS: i64 = 233280;

    pub fn new(seed: i64) -> Self {
        let mut rng = Self { state: 0 };
        rng.seed(seed);
        rng
    }

    /// Resets the generator. Any integer is accepted; it is reduced into
    /// `[0, MODULUS)` with Euclidean modulo, which leaves the sequence equal to
    /// the one produced by the unreduced recurrence.
    pub fn seed(&mut self, value: i64) {
        self.state = value.rem_euclid(Self::MODULUS);
    }

    pub fn state(&self) -> i64 {
        self.state
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        // state < MODULUS, so the product stays far below i64::MAX
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}

#[cfg(test)]
mod tests {
    use super::Lcg;

    #[test]
    fn test_reproducible() {
        let draw = || {
            let mut rng = Lcg::new(42);
            (0..5).map(|_| rng.next()).collect::<Vec<_>>()
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn test_known_values() {
        let mut rng = Lcg::new(42);
        // (42 * 9301 + 49297) % 233280 = 439939 % 233280 = 206659
        assert_eq!(rng.next(), 206659. / 233280.);
        assert_eq!(rng.state(), 206659);
        // (206659 * 9301 + 49297) % 233280
        let expected = (206659 * 9301 + 49297) % 233280;
        assert_eq!(rng.next(), expected as f64 / 233280.);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = Lcg::new(7);
        let first = (0..3).map(|_| rng.next()).collect::<Vec<_>>();
        rng.seed(7);
        let second = (0..3).map(|_| rng.next()).collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_any_seed_in_range() {
        for seed in [0, -1, -233281, i64::MIN, i64::MAX, 233280, 1 << 40] {
            let mut rng = Lcg::new(seed);
            for _ in 0..1000 {
                let x = rng.next();
                assert!((0.0..1.0).contains(&x), "seed={} x={}", seed, x);
            }
        }
    }

    #[test]
    fn test_congruent_seeds_match() {
        let mut a = Lcg::new(-5);
        let mut b = Lcg::new(233280 - 5);
        for _ in 0..10 {
            assert_eq!(a.next(), b.next());
        }
    }
}
