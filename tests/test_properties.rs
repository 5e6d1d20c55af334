//! Property-based tests for the binomial distribution handle.

use proptest::prelude::*;
use statr::{Binomial, DiscreteDistribution, Distribution};

fn probability_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

proptest! {
    // 1. Every out-of-range or non-finite p is rejected at construction
    #[test]
    fn invalid_p_rejected(n in 1u64..1000, p in prop::num::f64::ANY) {
        prop_assume!(!(0.0..=1.0).contains(&p));
        prop_assert!(Binomial::new(n, p).is_err());
    }

    // 2. n = 0 is rejected for any p
    #[test]
    fn zero_n_rejected(p in probability_strategy()) {
        prop_assert!(Binomial::new(0, p).is_err());
    }

    // 3. A failed write never moves the stored parameters
    #[test]
    fn rejected_write_keeps_state(
        n in 1u64..1000,
        p in probability_strategy(),
        bad in prop::num::f64::ANY,
    ) {
        prop_assume!(!(0.0..=1.0).contains(&bad));
        let mut b = Binomial::new(n, p).unwrap();
        prop_assert!(b.set_p(bad).is_err());
        prop_assert!(b.set_n(0).is_err());
        prop_assert_eq!(b.n(), n);
        prop_assert_eq!(b.p(), p);
    }

    // 4. A successful write is immediately visible to derived reads
    #[test]
    fn accepted_write_is_live(n in 1u64..1000, p in probability_strategy()) {
        let mut b = Binomial::default();
        b.set_n(n).unwrap();
        b.set_p(p).unwrap();
        prop_assert!((b.mean() - n as f64 * p).abs() < 1e-9);
        prop_assert!((b.var() - n as f64 * p * (1.0 - p)).abs() < 1e-9);
    }

    // 5. CDF is monotone non-decreasing in x
    #[test]
    fn cdf_monotone(n in 1u64..200, p in probability_strategy(), x in -5.0f64..250.0) {
        let b = Binomial::new(n, p).unwrap();
        prop_assert!(b.cdf(x) <= b.cdf(x + 1.0) + 1e-12);
    }

    // 6. PMF values are probabilities and agree with log_pmf
    #[test]
    fn pmf_in_unit_interval(n in 1u64..200, p in probability_strategy(), k in 0u64..250) {
        let b = Binomial::new(n, p).unwrap();
        let v = b.pmf(k as f64);
        prop_assert!((0.0..=1.0).contains(&v));
        if v > 0.0 {
            prop_assert!((b.log_pmf(k as f64).exp() - v).abs() < 1e-12);
        }
    }

    // 7. ppf returns the smallest k whose CDF reaches prob
    #[test]
    fn ppf_is_smallest(n in 1u64..100, p in 0.01f64..=0.99, prob in 0.001f64..0.999) {
        let b = Binomial::new(n, p).unwrap();
        let k = b.ppf(prob).unwrap();
        prop_assert!(b.cdf(k as f64) >= prob);
        if k > 0 {
            prop_assert!(b.cdf((k - 1) as f64) < prob);
        }
    }

    // 8. sf complements cdf on the support
    #[test]
    fn sf_complements_cdf(n in 1u64..100, p in probability_strategy(), k in 0u64..120) {
        let b = Binomial::new(n, p).unwrap();
        let x = k as f64;
        prop_assert!((b.sf(x) + b.cdf(x) - 1.0).abs() < 1e-9);
    }
}
