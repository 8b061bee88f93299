//! # Option Contract Models
//!
//! Derived, read-only records describing one recommended option contract.
//!
//! ## Description
//! An [`OptionContract`] is a value object produced once per chain
//! synthesis run and never mutated. Its identity is the natural key
//! `(symbol, contract_type, strike_price, expiration_date)`, unique
//! within one run.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Standard equity option multiplier: one contract covers 100 shares.
pub const CONTRACT_SIZE: u32 = 100;

/// Classification of the option right: Call or Put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractType {
    /// Right to buy.
    Call,
    /// Right to sell.
    Put,
}

impl ContractType {
    /// Static string representation used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Call => "CALL",
            ContractType::Put => "PUT",
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal recommendation tier for a contract.
///
/// Variants are declared weakest-first so the derived `Ord` matches the
/// tier ordering: `Speculative < Consider < ModerateBuy < Buy < StrongBuy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Speculative")]
    Speculative,
    #[serde(rename = "Consider")]
    Consider,
    #[serde(rename = "Moderate Buy")]
    ModerateBuy,
    #[serde(rename = "Buy")]
    Buy,
    #[serde(rename = "Strong Buy")]
    StrongBuy,
}

impl Recommendation {
    /// Numeric strength used for final list ordering, 1 (Speculative)
    /// through 5 (Strong Buy).
    pub fn strength(&self) -> u8 {
        match self {
            Recommendation::Speculative => 1,
            Recommendation::Consider => 2,
            Recommendation::ModerateBuy => 3,
            Recommendation::Buy => 4,
            Recommendation::StrongBuy => 5,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Speculative => "Speculative",
            Recommendation::Consider => "Consider",
            Recommendation::ModerateBuy => "Moderate Buy",
            Recommendation::Buy => "Buy",
            Recommendation::StrongBuy => "Strong Buy",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One ranked option contract recommendation.
///
/// # Fields
/// * `symbol` - Underlying ticker.
/// * `contract_type` - Call or Put.
/// * `strike_price` - Exercise price. Calls strike above spot, puts below,
///   progressively further out-of-the-money for later expirations.
/// * `expiration_date` - Contract expiry, always a Friday.
/// * `days_to_expiration` - Calendar days from the reference date.
/// * `premium` - Estimated per-share premium, floored at 0.05.
/// * `contract_size` - Share multiplier, fixed at [`CONTRACT_SIZE`].
/// * `total_cost` - `premium * contract_size`.
/// * `spot_price` - Underlying price at synthesis time.
/// * `break_even_price` - `strike + premium` (call) or `strike - premium` (put).
/// * `implied_volatility` - Jittered volatility estimate, percentage points.
/// * `delta` - In [-1, 1]; positive for calls, negative for puts.
/// * `theta` - Daily time decay, never positive.
/// * `gamma` - Bounded non-negative estimate.
/// * `vega` - Non-negative volatility sensitivity.
/// * `potential_return` - Percent return on a +/-10% spot move.
/// * `risk_reward_ratio` - Heuristic ratio of potential gain to loss.
/// * `recommendation` - Ordinal decision tier.
/// * `interest_level` - Integer 1-10 attention score.
/// * `reasoning` - Narrative rationale for the recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub symbol: String,
    pub contract_type: ContractType,
    pub strike_price: f64,
    pub expiration_date: NaiveDate,
    pub days_to_expiration: i64,
    pub premium: f64,
    pub contract_size: u32,
    pub total_cost: f64,
    pub spot_price: f64,
    pub break_even_price: f64,
    pub implied_volatility: f64,
    pub delta: f64,
    pub theta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub potential_return: f64,
    pub risk_reward_ratio: f64,
    pub recommendation: Recommendation,
    pub interest_level: u8,
    pub reasoning: String,
}

impl OptionContract {
    /// Composite ranking key for final chain ordering:
    /// recommendation strength times interest level, descending.
    pub fn ranking_score(&self) -> f64 {
        self.recommendation.strength() as f64 * self.interest_level as f64
    }
}
