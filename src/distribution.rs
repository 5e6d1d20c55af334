//! Core traits for probability distributions.

use crate::error::StatsResult;

/// Common interface for probability distributions.
///
/// Every method is recomputed from the distribution's current parameters on
/// each call; implementations must not cache derived quantities.
pub trait Distribution {
    /// Expected value.
    fn mean(&self) -> f64;

    /// Variance.
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Median.
    fn median(&self) -> f64;

    /// Mode.
    fn mode(&self) -> f64;

    /// Skewness.
    fn skewness(&self) -> f64;

    /// Excess kurtosis.
    fn kurtosis(&self) -> f64;
}

/// Interface for discrete distributions.
///
/// Evaluators take real-valued arguments: the probability mass of a
/// non-integer point is zero, and the CDF is a right-continuous step
/// function evaluated at `floor(x)`.
pub trait DiscreteDistribution: Distribution {
    /// Probability mass function: P(X = x).
    fn pmf(&self, x: f64) -> f64;

    /// Natural logarithm of the probability mass function.
    fn log_pmf(&self, x: f64) -> f64;

    /// Cumulative distribution function: P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function: P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Moment-generating function: E[exp(tX)].
    fn mgf(&self, t: f64) -> f64;

    /// Quantile function (inverse CDF): smallest k with CDF(k) ≥ prob.
    ///
    /// Returns an error if `prob` is not a probability.
    fn ppf(&self, prob: f64) -> StatsResult<u64>;
}
