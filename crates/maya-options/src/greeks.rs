//! # Greek Estimation Module
//!
//! Simplified point estimates of option sensitivities.
//!
//! ## Description
//! These are intentionally coarse, banded estimates rather than
//! analytical Black-Scholes Greeks: delta comes from moneyness bands
//! with a small random jitter inside each band, theta from a days-bucket
//! scale, gamma from a bounded draw, vega linearly from volatility.
//! Estimates are reproducible only up to the jitter, which consumes the
//! caller's random source.
//!
//! Note the moneyness convention here is the ratio `spot / strike`
//! (banded around 1.0), while the pricing model uses the offset form
//! `spot/strike - 1`. Both follow the source model.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use rand::Rng;
use serde::Serialize;

/// Point estimates of the four tracked sensitivities.
///
/// # Fields
/// * `delta` - Call delta in [0, 1], put delta in [-1, 0].
/// * `theta` - Daily time decay, never positive.
/// * `gamma` - Bounded non-negative estimate in [0.02, 0.10].
/// * `vega` - Non-negative, `volatility_pct * 0.15`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GreekEstimates {
    pub delta: f64,
    pub theta: f64,
    pub gamma: f64,
    pub vega: f64,
}

impl GreekEstimates {
    /// Estimates Greeks for a call contract.
    ///
    /// # Parameters
    /// * `spot` - Current underlying price.
    /// * `strike` - Contract strike price.
    /// * `volatility_pct` - Realized volatility in percentage points.
    /// * `days_to_expiration` - Calendar days until expiry.
    /// * `rng` - Random source for in-band jitter.
    pub fn for_call<R: Rng>(
        spot: f64,
        strike: f64,
        volatility_pct: f64,
        days_to_expiration: i64,
        rng: &mut R,
    ) -> Self {
        Self {
            delta: call_delta(spot, strike, rng),
            theta: theta(spot, volatility_pct, days_to_expiration),
            gamma: gamma(rng),
            vega: vega(volatility_pct),
        }
    }

    /// Estimates Greeks for a put contract. Delta mirrors the call with
    /// negative sign and shifted bands.
    pub fn for_put<R: Rng>(
        spot: f64,
        strike: f64,
        volatility_pct: f64,
        days_to_expiration: i64,
        rng: &mut R,
    ) -> Self {
        Self {
            delta: put_delta(spot, strike, rng),
            theta: theta(spot, volatility_pct, days_to_expiration),
            gamma: gamma(rng),
            vega: vega(volatility_pct),
        }
    }
}

/// Call delta from moneyness bands: deep ITM above 1.1, ITM above 1.0,
/// near-ATM above 0.95, OTM below scaled by moneyness.
fn call_delta<R: Rng>(spot: f64, strike: f64, rng: &mut R) -> f64 {
    let moneyness = spot / strike;
    if moneyness > 1.1 {
        rng.gen_range(0.9..1.0)
    } else if moneyness > 1.0 {
        rng.gen_range(0.7..0.9)
    } else if moneyness > 0.95 {
        rng.gen_range(0.4..0.7)
    } else {
        (0.3 * moneyness).max(0.05)
    }
}

/// Put delta bands mirror the call with thresholds at 0.9, 1.0, 1.05.
fn put_delta<R: Rng>(spot: f64, strike: f64, rng: &mut R) -> f64 {
    let moneyness = spot / strike;
    if moneyness < 0.9 {
        -rng.gen_range(0.9..1.0)
    } else if moneyness < 1.0 {
        -rng.gen_range(0.7..0.9)
    } else if moneyness < 1.05 {
        -rng.gen_range(0.4..0.7)
    } else {
        (-0.3 / moneyness).min(-0.05)
    }
}

/// Daily decay: `-spot * 0.001 * (vol / 100)`, accelerated near expiry.
fn theta(spot: f64, volatility_pct: f64, days_to_expiration: i64) -> f64 {
    let base = -spot * 0.001 * (volatility_pct / 100.0);
    let time_scale = if days_to_expiration < 7 {
        3.0
    } else if days_to_expiration < 14 {
        2.0
    } else if days_to_expiration < 30 {
        1.0
    } else {
        0.5
    };
    base * time_scale
}

fn gamma<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.02..0.10)
}

fn vega(volatility_pct: f64) -> f64 {
    volatility_pct * 0.15
}

/// Implied-volatility estimate: realized volatility inflated by a random
/// premium of up to 30%.
pub fn synthetic_iv<R: Rng>(volatility_pct: f64, rng: &mut R) -> f64 {
    volatility_pct * (1.0 + rng.gen_range(0.0..0.3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_call_delta_stays_in_unit_interval() {
        let mut rng = Pcg64::seed_from_u64(21);
        for strike in [80.0, 95.0, 100.0, 103.0, 120.0, 250.0] {
            for _ in 0..16 {
                let g = GreekEstimates::for_call(100.0, strike, 6.0, 14, &mut rng);
                assert!(
                    (0.0..=1.0).contains(&g.delta),
                    "call delta {} out of range at strike {}",
                    g.delta,
                    strike
                );
            }
        }
    }

    #[test]
    fn test_put_delta_stays_in_negative_unit_interval() {
        let mut rng = Pcg64::seed_from_u64(22);
        for strike in [80.0, 95.0, 100.0, 103.0, 120.0, 250.0] {
            for _ in 0..16 {
                let g = GreekEstimates::for_put(100.0, strike, 6.0, 14, &mut rng);
                assert!(
                    (-1.0..=0.0).contains(&g.delta),
                    "put delta {} out of range at strike {}",
                    g.delta,
                    strike
                );
            }
        }
    }

    #[test]
    fn test_delta_bands_order_by_moneyness() {
        let mut rng = Pcg64::seed_from_u64(23);
        // Deep ITM call dominates near-ATM which dominates OTM
        let deep = GreekEstimates::for_call(120.0, 100.0, 6.0, 14, &mut rng).delta;
        let atm = GreekEstimates::for_call(100.0, 101.0, 6.0, 14, &mut rng).delta;
        let otm = GreekEstimates::for_call(85.0, 100.0, 6.0, 14, &mut rng).delta;
        assert!(deep >= 0.9);
        assert!((0.4..0.7).contains(&atm));
        assert!((0.05..0.3).contains(&otm));
    }

    #[test]
    fn test_theta_never_positive_and_accelerates() {
        let near = theta(100.0, 8.0, 3);
        let mid = theta(100.0, 8.0, 20);
        let far = theta(100.0, 8.0, 60);
        assert!(near <= 0.0 && mid <= 0.0 && far <= 0.0);
        assert!(near < mid && mid < far, "decay should accelerate near expiry");
    }

    #[test]
    fn test_gamma_and_vega_bounds() {
        let mut rng = Pcg64::seed_from_u64(24);
        for _ in 0..64 {
            let g = gamma(&mut rng);
            assert!((0.02..0.10).contains(&g));
        }
        assert!((vega(8.0) - 1.2).abs() < 1e-12);
        assert!(vega(0.0) == 0.0);
    }

    #[test]
    fn test_synthetic_iv_inflates_realized_vol() {
        let mut rng = Pcg64::seed_from_u64(25);
        for _ in 0..64 {
            let iv = synthetic_iv(10.0, &mut rng);
            assert!((10.0..13.0).contains(&iv));
        }
    }
}
