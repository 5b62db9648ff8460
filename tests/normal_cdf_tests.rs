
use approx::assert_abs_diff_eq;
use black76_lib::normal_cdf;
use rand::Rng;
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::test_rng;

/// Cross-check against an independent implementation over the practical range
#[test]
fn test_normal_cdf_matches_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for i in 0..=1600 {
        let x = -8.0 + i as f64 * 0.01;
        assert_abs_diff_eq!(normal_cdf(x), normal.cdf(x), epsilon = 1e-12);
    }
}

#[test]
fn test_normal_cdf_symmetry_random() {
    let mut rng = test_rng();
    for _ in 0..10_000 {
        let x: f64 = rng.gen_range(-10.0..10.0);
        assert_abs_diff_eq!(normal_cdf(-x), 1.0 - normal_cdf(x), epsilon = 1e-9);
    }
}

#[test]
fn test_normal_cdf_monotone_random_pairs() {
    let mut rng = test_rng();
    for _ in 0..10_000 {
        let a: f64 = rng.gen_range(-12.0..12.0);
        let b: f64 = rng.gen_range(-12.0..12.0);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        assert!(
            normal_cdf(lo) <= normal_cdf(hi),
            "Φ({}) > Φ({})",
            lo,
            hi
        );
    }
}

#[test]
fn test_normal_cdf_center_and_bounds() {
    assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
    for x in [-1e6, -50.0, -5.0, 5.0, 50.0, 1e6] {
        let p = normal_cdf(x);
        assert!((0.0..=1.0).contains(&p), "Φ({}) = {} out of [0, 1]", x, p);
    }
}
