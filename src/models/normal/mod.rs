// Standard normal distribution helpers shared by the pricing models.

use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Returns `P(Z <= x)` for `Z ~ N(0, 1)` using the exact relation
/// `Φ(x) = 0.5 * [1 + erf(x / √2)]`. The precision is that of `libm::erf`.
///
/// Infinite inputs saturate to 0 and 1. NaN propagates.
///
/// ```rust
/// use black76_lib::normal_cdf;
///
/// assert_eq!(normal_cdf(0.0), 0.5);
/// assert!((normal_cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // 50-digit references
        let cases = [
            (-3.0, 0.001_349_898_031_630_094_5),
            (-1.0, 0.158_655_253_931_457_05),
            (0.5, 0.691_462_461_274_013_1),
            (1.96, 0.975_002_104_851_779_6),
        ];
        for (x, expected) in cases {
            assert!(
                (normal_cdf(x) - expected).abs() < 1e-15,
                "Φ({}) = {} expected {}",
                x,
                normal_cdf(x),
                expected
            );
        }
    }

    #[test]
    fn test_center_and_limits() {
        assert_eq!(normal_cdf(0.0), 0.5);
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(normal_cdf(40.0), 1.0);
        assert_eq!(normal_cdf(-40.0), 0.0);
        assert!(normal_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_symmetry_on_grid() {
        for i in 0..=800 {
            let x = i as f64 * 0.01;
            let lhs = normal_cdf(-x);
            let rhs = 1.0 - normal_cdf(x);
            assert!((lhs - rhs).abs() < 1e-12, "symmetry broken at x={}", x);
        }
    }

    #[test]
    fn test_monotone_and_bounded_on_grid() {
        let mut prev = normal_cdf(-10.0);
        for i in 1..=2000 {
            let x = -10.0 + i as f64 * 0.01;
            let p = normal_cdf(x);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= prev, "Φ decreased between {} and {}", x - 0.01, x);
            prev = p;
        }
    }
}
