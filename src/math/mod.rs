//! Standard normal distribution helpers shared by every analytic kernel.
//!
//! [`normal_cdf`] is the single Φ implementation in the crate; pricing code
//! must not recompute its own approximation.

pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal CDF.
///
/// Abramowitz & Stegun 7.1.26 polynomial approximation, max absolute error
/// about 7.5e-8. Negative arguments are handled by reflection, so
/// `normal_cdf(-x) == 1 - normal_cdf(x)` holds exactly in floating point.
pub fn normal_cdf(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * z);
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let approx = 1.0 - normal_pdf(z) * poly;
    if x >= 0.0 { approx } else { 1.0 - approx }
}
