//! Binomial distribution.

use crate::distribution::{DiscreteDistribution, Distribution};
use crate::error::{StatsError, StatsResult};
use crate::special;

/// Binomial distribution.
///
/// The binomial distribution models the number of successes in n independent
/// Bernoulli trials with success probability p.
///
/// P(X = k) = C(n, k) p^k (1-p)^(n-k)
///
/// Both parameters may be reassigned after construction; every write is
/// validated and a rejected write leaves the stored value untouched. Moments
/// and evaluators always reflect the parameters at call time — nothing is
/// cached.
///
/// # Examples
///
/// ```ignore
/// use statr::{Binomial, DiscreteDistribution, Distribution};
///
/// // 10 coin flips with fair coin
/// let mut b = Binomial::new(10, 0.5).unwrap();
/// println!("P(X = 5) = {}", b.pmf(5.0)); // Most likely outcome
/// println!("P(X ≤ 3) = {}", b.cdf(3.0)); // At most 3 heads
///
/// // Switch to a biased coin; subsequent reads use the new parameter
/// b.set_p(0.2).unwrap();
/// println!("E[X] = {}", b.mean()); // 2.0
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial {
    /// Number of trials
    n: u64,
    /// Success probability
    p: f64,
}

impl Binomial {
    /// Create a new binomial distribution.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of trials (must be at least 1)
    /// * `p` - Probability of success on each trial (must be in [0, 1])
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending parameter and its value if `n`
    /// is zero or `p` is not a probability.
    pub fn new(n: u64, p: f64) -> StatsResult<Self> {
        Self::validate_n(n)?;
        Self::validate_p(p)?;
        Ok(Self { n, p })
    }

    /// Get the number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Get the success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Set the number of trials.
    ///
    /// A rejected write returns an error and keeps the prior value.
    pub fn set_n(&mut self, n: u64) -> StatsResult<()> {
        Self::validate_n(n)?;
        self.n = n;
        Ok(())
    }

    /// Set the success probability.
    ///
    /// A rejected write returns an error and keeps the prior value.
    pub fn set_p(&mut self, p: f64) -> StatsResult<()> {
        Self::validate_p(p)?;
        self.p = p;
        Ok(())
    }

    fn validate_n(n: u64) -> StatsResult<()> {
        if n == 0 {
            return Err(StatsError::InvalidParameter {
                name: "n".to_string(),
                value: n as f64,
                reason: "number of trials must be a positive integer".to_string(),
            });
        }
        Ok(())
    }

    fn validate_p(p: f64) -> StatsResult<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidParameter {
                name: "p".to_string(),
                value: p,
                reason: "probability must be in [0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Binomial {
    /// A single fair trial: `n = 1`, `p = 0.5`.
    fn default() -> Self {
        Self { n: 1, p: 0.5 }
    }
}

impl Distribution for Binomial {
    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn var(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    fn median(&self) -> f64 {
        (self.n as f64 * self.p).round()
    }

    fn mode(&self) -> f64 {
        // floor((n+1)p), clamped to the support for p = 1
        (((self.n + 1) as f64) * self.p).floor().min(self.n as f64)
    }

    fn skewness(&self) -> f64 {
        if self.var() == 0.0 {
            return 0.0;
        }
        (1.0 - 2.0 * self.p) / self.var().sqrt()
    }

    fn kurtosis(&self) -> f64 {
        if self.var() == 0.0 {
            return 0.0;
        }
        (1.0 - 6.0 * self.p * (1.0 - self.p)) / self.var()
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 || x > self.n as f64 || x.fract() != 0.0 {
            return 0.0;
        }
        if self.p == 0.0 {
            return if x == 0.0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if x == self.n as f64 { 1.0 } else { 0.0 };
        }

        self.log_pmf(x).exp()
    }

    fn log_pmf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let n_f = self.n as f64;
        if x < 0.0 || x > n_f || x.fract() != 0.0 {
            return f64::NEG_INFINITY;
        }
        if self.p == 0.0 {
            return if x == 0.0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if self.p == 1.0 {
            return if x == n_f { 0.0 } else { f64::NEG_INFINITY };
        }

        let k = x as u64;
        special::log_binom(self.n, k) + x * self.p.ln() + (n_f - x) * (1.0 - self.p).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        if x >= self.n as f64 {
            return 1.0;
        }
        if self.p == 0.0 {
            return 1.0;
        }
        if self.p == 1.0 {
            return 0.0;
        }

        // CDF = I_{1-p}(n-k, k+1) = 1 - I_p(k+1, n-k) with k = floor(x)
        let k = x.floor();
        1.0 - special::betainc(k + 1.0, self.n as f64 - k, self.p)
    }

    fn sf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 1.0;
        }
        if x >= self.n as f64 {
            return 0.0;
        }
        if self.p == 0.0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return 1.0;
        }

        // SF = P(X > x) = I_p(k+1, n-k) with k = floor(x)
        let k = x.floor();
        special::betainc(k + 1.0, self.n as f64 - k, self.p)
    }

    fn mgf(&self, t: f64) -> f64 {
        // E[exp(tX)] = (q + p e^t)^n
        (1.0 - self.p + self.p * t.exp()).powf(self.n as f64)
    }

    fn ppf(&self, prob: f64) -> StatsResult<u64> {
        if !(0.0..=1.0).contains(&prob) {
            return Err(StatsError::InvalidProbability { value: prob });
        }
        if prob == 0.0 {
            return Ok(0);
        }
        if prob == 1.0 {
            return Ok(self.n);
        }

        // Binary search for smallest k with CDF(k) >= prob
        let mut lo = 0u64;
        let mut hi = self.n;

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.cdf(mid as f64) < prob {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        Ok(lo)
    }
}
