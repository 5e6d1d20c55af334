//! Special functions used by the distributions.

use statrs::function::beta;
use statrs::function::gamma;

/// Log-gamma function.
pub(crate) fn lgamma(x: f64) -> f64 {
    gamma::ln_gamma(x)
}

/// Regularized incomplete beta function: I_x(a, b)
pub(crate) fn betainc(a: f64, b: f64, x: f64) -> f64 {
    beta::beta_reg(a, b, x)
}

/// Helper for computing log-binomial coefficients.
pub(crate) fn log_binom(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }

    let n_f = n as f64;
    let k_f = k as f64;

    lgamma(n_f + 1.0) - lgamma(k_f + 1.0) - lgamma(n_f - k_f + 1.0)
}
