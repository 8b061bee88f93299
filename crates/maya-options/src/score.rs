//! # Recommendation Scorer
//!
//! Converts volatility, trend alignment, and time-to-expiration into a
//! qualitative tier, and volatility plus momentum into an interest score.

use maya_models::Recommendation;

/// Maps volatility and trend alignment to a recommendation tier.
///
/// # Description
/// The raw score is volatility times an alignment factor (1.5 when the
/// contract direction matches the trend, 0.7 against it), discounted for
/// very short-dated contracts (riskier) and long-dated ones (less
/// leverage), then banded through fixed thresholds.
///
/// # Parameters
/// * `volatility_pct` - Realized volatility in percentage points.
/// * `days_to_expiration` - Calendar days until expiry.
/// * `trend_aligned` - Whether the contract direction matches the 24h trend.
pub fn recommendation_strength(
    volatility_pct: f64,
    days_to_expiration: i64,
    trend_aligned: bool,
) -> Recommendation {
    let mut score = volatility_pct * if trend_aligned { 1.5 } else { 0.7 };

    if days_to_expiration < 10 {
        score *= 0.8;
    } else if days_to_expiration > 45 {
        score *= 0.9;
    }

    if score > 10.0 {
        Recommendation::StrongBuy
    } else if score > 7.0 {
        Recommendation::Buy
    } else if score > 5.0 {
        Recommendation::ModerateBuy
    } else if score > 3.0 {
        Recommendation::Consider
    } else {
        Recommendation::Speculative
    }
}

/// Interest level 1-10 from volatility and absolute 24h move:
/// `clamp(round(vol * 0.4 + |change| * 0.6), 1, 10)`.
pub fn interest_level(volatility_pct: f64, abs_change_percent: f64) -> u8 {
    let score = volatility_pct * 0.4 + abs_change_percent * 0.6;
    (score.round() as i64).clamp(1, 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bands() {
        // Aligned, mid-dated: score == volatility * 1.5
        assert_eq!(recommendation_strength(8.0, 20, true), Recommendation::StrongBuy);
        assert_eq!(recommendation_strength(5.0, 20, true), Recommendation::Buy);
        assert_eq!(recommendation_strength(3.6, 20, true), Recommendation::ModerateBuy);
        assert_eq!(recommendation_strength(2.2, 20, true), Recommendation::Consider);
        assert_eq!(recommendation_strength(1.0, 20, true), Recommendation::Speculative);
    }

    #[test]
    fn test_misalignment_discounts_score() {
        // 8% vol aligned is Strong Buy; against trend it drops two tiers
        assert_eq!(recommendation_strength(8.0, 20, false), Recommendation::ModerateBuy);
    }

    #[test]
    fn test_time_decay_penalties() {
        // 7.0 * 1.5 = 10.5 (Strong Buy); * 0.8 short-dated = 8.4 (Buy)
        assert_eq!(recommendation_strength(7.0, 20, true), Recommendation::StrongBuy);
        assert_eq!(recommendation_strength(7.0, 5, true), Recommendation::Buy);
        // * 0.9 long-dated = 9.45 (Buy)
        assert_eq!(recommendation_strength(7.0, 50, true), Recommendation::Buy);
    }

    #[test]
    fn test_interest_level_clamps_to_1_10() {
        assert_eq!(interest_level(0.0, 0.0), 1);
        assert_eq!(interest_level(40.0, 40.0), 10);
        // vol 5, change 5: 5*0.4 + 5*0.6 = 5
        assert_eq!(interest_level(5.0, 5.0), 5);
        // rounding: 4.5 -> 5
        assert_eq!(interest_level(4.5, 4.5), 5);
    }
}
