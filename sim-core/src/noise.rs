/// Smooth pseudo-noise built from three phase-shifted sines.
///
/// The weights sum to `1.0`, so the output stays within `[-1, 1]`.
/// Evaluated in `f64`: the argument grows with the field clock and would
/// lose sub-frame resolution in `f32`.
#[inline]
pub fn drift_noise(x: f64) -> f32 {
    let s1 = (x * 1.1).sin() * 0.5;
    let s2 = (x * 2.3 + 1.7).sin() * 0.3;
    let s3 = (x * 3.7 + 2.9).sin() * 0.2;
    (s1 + s2 + s3) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_noise_is_bounded() {
        for i in 0..10_000 {
            let x = i as f64 * 0.37 - 1500.0;
            let n = drift_noise(x);
            assert!((-1.0..=1.0).contains(&n), "noise({x}) = {n}");
        }
    }

    #[test]
    fn drift_noise_matches_formula_at_zero() {
        let expected = (0.3 * 1.7f64.sin() + 0.2 * 2.9f64.sin()) as f32;
        assert!((drift_noise(0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn drift_noise_is_smooth() {
        // Max slope is 0.5*1.1 + 0.3*2.3 + 0.2*3.7 = 1.98.
        let h = 1e-3;
        for i in 0..1000 {
            let x = i as f64 * 0.1;
            let step = (drift_noise(x + h) - drift_noise(x)).abs();
            assert!(step <= 1.98 * h as f32 + 1e-5);
        }
    }

    #[test]
    fn drift_noise_resolves_small_steps_at_large_arguments() {
        // Around a clock of ~2000 the noise argument is ~60000; one particle
        // update moves it by 0.003 and that must still change the signal.
        let x = 61_440.0;
        assert_ne!(drift_noise(x), drift_noise(x + 0.003));
    }
}
