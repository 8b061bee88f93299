//! # Recommendation Reasoning
//!
//! Narrative rationale templates keyed by contract type and trend sign,
//! parameterized with the symbol, timeframe bucket, and a volatility
//! descriptor. The templates are data; selection is a pure lookup.

use maya_models::ContractType;

/// Holding-period bucket derived from days to expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeframeBucket {
    /// 14 days or fewer.
    ShortTerm,
    /// 15 to 30 days.
    MediumTerm,
    /// More than 30 days.
    LongerTerm,
}

impl TimeframeBucket {
    pub fn from_days(days_to_expiration: i64) -> Self {
        if days_to_expiration <= 14 {
            TimeframeBucket::ShortTerm
        } else if days_to_expiration <= 30 {
            TimeframeBucket::MediumTerm
        } else {
            TimeframeBucket::LongerTerm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeframeBucket::ShortTerm => "short-term",
            TimeframeBucket::MediumTerm => "medium-term",
            TimeframeBucket::LongerTerm => "longer-term",
        }
    }
}

impl std::fmt::Display for TimeframeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative volatility label: high above 8, moderate above 4, else low.
pub fn volatility_descriptor(volatility_pct: f64) -> &'static str {
    if volatility_pct > 8.0 {
        "high"
    } else if volatility_pct > 4.0 {
        "moderate"
    } else {
        "low"
    }
}

/// Builds the narrative rationale for a contract recommendation.
///
/// # Parameters
/// * `symbol` - Underlying ticker.
/// * `change_percent_24h` - Signed 24h move of the underlying.
/// * `days_to_expiration` - Calendar days until expiry.
/// * `contract_type` - Call or Put.
/// * `volatility_pct` - Realized volatility in percentage points.
pub fn contract_reasoning(
    symbol: &str,
    change_percent_24h: f64,
    days_to_expiration: i64,
    contract_type: ContractType,
    volatility_pct: f64,
) -> String {
    let timeframe = TimeframeBucket::from_days(days_to_expiration);
    let vol_desc = volatility_descriptor(volatility_pct);

    match contract_type {
        ContractType::Call => {
            if change_percent_24h > 0.0 {
                format!(
                    "{symbol} shows strong upward momentum with {vol_desc} volatility. \
                     This {timeframe} call option provides leveraged exposure to continued \
                     upside movement with a favorable risk-reward profile."
                )
            } else {
                format!(
                    "Despite recent price weakness, {symbol} shows technical indicators \
                     suggesting potential reversal. This {timeframe} call option offers an \
                     attractive entry for contrarian positions with defined risk."
                )
            }
        }
        ContractType::Put => {
            if change_percent_24h < 0.0 {
                format!(
                    "{symbol} shows continued downward price action with {vol_desc} \
                     volatility. This {timeframe} put option provides protection or profit \
                     potential from further decline."
                )
            } else {
                format!(
                    "{symbol} may be approaching resistance levels despite recent gains. \
                     This {timeframe} put option offers tactical hedging with a favorable \
                     premium due to lower implied volatility."
                )
            }
        }
    }
}
