//! statr - Statistical distributions with validated, mutable parameters
//!
//! statr provides probability distributions as small stateful handles: the
//! parameters are validated at construction and on every reassignment, and
//! every derived quantity (moments, CDF, PMF, MGF, quantile) is recomputed
//! from the current parameters on each call, so mutating a parameter is
//! immediately visible to subsequent reads.
//!
//! # Current Modules
//!
//! - [`Binomial`] - Binomial distribution (number of successes in n trials)
//! - [`Distribution`] / [`DiscreteDistribution`] - distribution traits
//! - [`StatsError`] / [`StatsResult`] - error handling
//!
//! # Example
//!
//! ```ignore
//! use statr::{Binomial, DiscreteDistribution, Distribution};
//!
//! let mut b = Binomial::new(5, 0.1).unwrap();
//! assert!((b.cdf(0.8) - 0.59049).abs() < 1e-6);
//!
//! // Reassigning a parameter changes every subsequent read
//! b.set_p(0.5).unwrap();
//! assert!((b.mean() - 2.5).abs() < 1e-12);
//!
//! // Invalid writes are rejected and leave the handle unchanged
//! assert!(b.set_p(1.5).is_err());
//! assert!((b.p() - 0.5).abs() < 1e-12);
//! ```

mod binomial;
mod distribution;
mod error;
mod special;

pub use binomial::Binomial;
pub use distribution::{DiscreteDistribution, Distribution};
pub use error::{StatsError, StatsResult};
