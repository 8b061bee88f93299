//! # Approximate Options Pricing Model
//!
//! Estimates contract premium, breakeven, and potential return.
//!
//! ## Description
//! This is a documented approximation, not a closed-form solver: premium
//! is built from a volatility-time base with an intrinsic-value add for
//! in-the-money contracts and a discount for out-of-the-money ones.
//! A floor keeps every premium strictly positive regardless of inputs.
//!
//! ## Model
//! ```text
//! time     = sqrt(days / 365)
//! vol      = volatility_pct / 100
//! m        = spot/strike - 1   (call)    strike/spot - 1   (put)
//! base     = spot * vol * time
//! premium  = base + spot * m * 0.5        if m > 0
//!          = base * (1 + |m| * 0.5)       otherwise
//! premium  = max(premium, 0.05)
//! ```
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use maya_models::ContractType;

/// Floor applied to every premium estimate. Guards the one pathological
/// edge (near-zero time or volatility) the model can produce.
pub const MIN_PREMIUM: f64 = 0.05;

/// Estimates the per-share premium for a contract.
///
/// # Parameters
/// * `spot` - Current underlying price.
/// * `strike` - Contract strike price.
/// * `days_to_expiration` - Calendar days until expiry.
/// * `volatility_pct` - Realized volatility in percentage points.
/// * `contract_type` - Call or Put.
///
/// # Returns
/// Premium estimate, always `>= MIN_PREMIUM`.
///
/// # Examples
/// ```
/// use maya_models::ContractType;
/// use maya_options::pricing::approximate_premium;
///
/// let premium = approximate_premium(100.0, 110.0, 30, 5.0, ContractType::Call);
/// assert!(premium >= 0.05);
/// ```
pub fn approximate_premium(
    spot: f64,
    strike: f64,
    days_to_expiration: i64,
    volatility_pct: f64,
    contract_type: ContractType,
) -> f64 {
    let time_component = (days_to_expiration as f64 / 365.0).sqrt();
    let volatility_component = volatility_pct / 100.0;
    let moneyness = match contract_type {
        ContractType::Call => spot / strike - 1.0,
        ContractType::Put => strike / spot - 1.0,
    };

    let mut premium = spot * volatility_component * time_component;

    if moneyness > 0.0 {
        // In the money: add intrinsic value
        premium += spot * moneyness * 0.5;
    } else {
        // Out of the money: discount the time value
        premium *= 1.0 + moneyness.abs() * 0.5;
    }

    premium.max(MIN_PREMIUM)
}

/// Underlying price at which the contract's payoff offsets the premium.
pub fn break_even(strike: f64, premium: f64, contract_type: ContractType) -> f64 {
    match contract_type {
        ContractType::Call => strike + premium,
        ContractType::Put => strike - premium,
    }
}

/// Percent return if the underlying moves 10% in the contract's favor.
///
/// Simulates spot moving up 10% for a call (down 10% for a put), takes
/// the intrinsic value at that hypothetical price, and returns
/// `(intrinsic / premium - 1) * 100`.
pub fn potential_return(
    premium: f64,
    spot: f64,
    strike: f64,
    contract_type: ContractType,
) -> f64 {
    let intrinsic = match contract_type {
        ContractType::Call => (spot * 1.1 - strike).max(0.0),
        ContractType::Put => (strike - spot * 0.9).max(0.0),
    };
    (intrinsic / premium - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otm_call_keeps_floor() {
        // spot=100, strike=110, 30 DTE, 5% vol: deep OTM, tiny time value
        let premium = approximate_premium(100.0, 110.0, 30, 5.0, ContractType::Call);
        assert!(premium >= MIN_PREMIUM, "premium {} below floor", premium);
        assert!(
            (break_even(110.0, premium, ContractType::Call) - (110.0 + premium)).abs() < 1e-12
        );
    }

    #[test]
    fn test_zero_days_floors_premium() {
        let premium = approximate_premium(100.0, 105.0, 0, 8.0, ContractType::Call);
        assert_eq!(premium, MIN_PREMIUM);
    }

    #[test]
    fn test_itm_call_carries_intrinsic() {
        // spot=110, strike=100: moneyness 0.10, intrinsic add = 110*0.10*0.5
        let premium = approximate_premium(110.0, 100.0, 14, 6.0, ContractType::Call);
        let base = 110.0 * 0.06 * (14.0f64 / 365.0).sqrt();
        assert!((premium - (base + 5.5)).abs() < 1e-9);
    }

    #[test]
    fn test_otm_multiplier_scales_with_distance() {
        // The model applies (1 + |m|*0.5) to the base for OTM contracts,
        // so premium grows with strike distance on both sides.
        let atm = approximate_premium(100.0, 100.0, 21, 10.0, ContractType::Call);
        let otm = approximate_premium(100.0, 120.0, 21, 10.0, ContractType::Call);
        assert!(otm > atm);
        let put_otm = approximate_premium(100.0, 80.0, 21, 10.0, ContractType::Put);
        assert!(put_otm > atm);
    }

    #[test]
    fn test_put_break_even_below_strike() {
        let premium = approximate_premium(100.0, 95.0, 21, 12.0, ContractType::Put);
        let be = break_even(95.0, premium, ContractType::Put);
        assert!(be < 95.0);
    }

    #[test]
    fn test_potential_return_uses_favorable_move() {
        // Call: spot 100 -> 110, strike 105 leaves 5 intrinsic
        let ret = potential_return(2.0, 100.0, 105.0, ContractType::Call);
        assert!((ret - 150.0).abs() < 1e-9);
        // Put: spot 100 -> 90, strike 95 leaves 5 intrinsic
        let ret = potential_return(2.0, 100.0, 95.0, ContractType::Put);
        assert!((ret - 150.0).abs() < 1e-9);
        // Worthless at the hypothetical price: total loss
        let ret = potential_return(2.0, 100.0, 120.0, ContractType::Call);
        assert!((ret - (-100.0)).abs() < 1e-9);
    }
}
