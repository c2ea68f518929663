//! Standard normal distribution approximations
//!
//! Forward and inverse CDF of the standard normal, implemented as closed-form
//! rational approximations so the crate needs no special-function dependency.
//! Accuracy is sized for significance testing: the forward CDF is good to
//! about 1.5e-7 (Abramowitz & Stegun 7.1.26), the inverse to about 1e-9
//! (Acklam's piecewise rational fit).

/// Abramowitz & Stegun 7.1.26 error-function coefficients
const ERF_A1: f64 = 0.254829592;
const ERF_A2: f64 = -0.284496736;
const ERF_A3: f64 = 1.421413741;
const ERF_A4: f64 = -1.453152027;
const ERF_A5: f64 = 1.061405429;
const ERF_P: f64 = 0.3275911;

/// Acklam inverse-CDF coefficients: central region numerator/denominator
const ICDF_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const ICDF_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam inverse-CDF coefficients: tail region numerator/denominator
const ICDF_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const ICDF_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Boundary between the central region and the tails of the inverse fit
const ICDF_P_LOW: f64 = 0.02425;

/// Error function approximation (Abramowitz & Stegun 7.1.26)
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + ERF_P * x);
    let y = 1.0
        - (((((ERF_A5 * t + ERF_A4) * t) + ERF_A3) * t + ERF_A2) * t + ERF_A1)
            * t
            * (-x * x).exp();

    sign * y
}

/// Cumulative distribution function of the standard normal
///
/// `cdf(0.0)` is exactly 0.5 and `cdf(-x) == 1 - cdf(x)` to within floating
/// tolerance, since the underlying error function is odd.
pub fn cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Inverse cumulative distribution function (quantile) of the standard normal
///
/// Domain is the open interval (0, 1): `p <= 0` maps to negative infinity and
/// `p >= 1` to positive infinity, so tail arguments degrade gracefully rather
/// than panicking. `inverse_cdf(0.5)` is exactly 0.
///
/// Piecewise rational approximation after Acklam: the central region
/// evaluates a degree-5/degree-5 rational in `(p - 0.5)^2`, the lower tail
/// one in `sqrt(-2 ln p)`, and the upper tail reflects the lower formula.
pub fn inverse_cdf(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let p_high = 1.0 - ICDF_P_LOW;

    if p < ICDF_P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((ICDF_C[0] * q + ICDF_C[1]) * q + ICDF_C[2]) * q + ICDF_C[3]) * q + ICDF_C[4]) * q
            + ICDF_C[5])
            / ((((ICDF_D[0] * q + ICDF_D[1]) * q + ICDF_D[2]) * q + ICDF_D[3]) * q + 1.0)
    } else if p <= p_high {
        let q = p - 0.5;
        let r = q * q;
        (((((ICDF_A[0] * r + ICDF_A[1]) * r + ICDF_A[2]) * r + ICDF_A[3]) * r + ICDF_A[4]) * r
            + ICDF_A[5])
            * q
            / (((((ICDF_B[0] * r + ICDF_B[1]) * r + ICDF_B[2]) * r + ICDF_B[3]) * r + ICDF_B[4])
                * r
                + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((ICDF_C[0] * q + ICDF_C[1]) * q + ICDF_C[2]) * q + ICDF_C[3]) * q + ICDF_C[4]) * q
            + ICDF_C[5])
            / ((((ICDF_D[0] * q + ICDF_D[1]) * q + ICDF_D[2]) * q + ICDF_D[3]) * q + 1.0)
    }
}
