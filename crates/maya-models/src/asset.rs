//! # Asset Snapshot Models
//!
//! Value types describing one tradable instrument at one point in time.
//!
//! ## Description
//! An [`AssetSnapshot`] is produced fresh on every synthesis call and is
//! immutable once returned: the next batch supersedes it rather than
//! updating it in place. The snapshot carries multi-timeframe movement,
//! price bracketing, scale figures, and a narrative reason for the move.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use serde::{Deserialize, Serialize};

/// Asset class of a tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentClass {
    /// Exchange-listed stock.
    Equity,
    /// Cryptocurrency asset.
    Crypto,
}

impl InstrumentClass {
    /// Static string representation used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentClass::Equity => "equity",
            InstrumentClass::Crypto => "crypto",
        }
    }
}

impl std::fmt::Display for InstrumentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Volatility tier of an instrument.
///
/// # Description
/// The tier is the single discriminator that parameterizes every random
/// range used during synthesis (movement bounds, price scale, market-cap
/// scale). The first four variants apply to equities, the last four to
/// crypto assets; [`AssetTier::class`] recovers the owning class.
///
/// # Variants
/// * `BlueChip` / `Growth` / `Momentum` / `SmallCap` - equity tiers,
///   ordered from least to most volatile.
/// * `Major` / `Altcoin` / `Volatile` / `Memecoin` - crypto tiers,
///   ordered from least to most volatile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetTier {
    BlueChip,
    Growth,
    Momentum,
    SmallCap,
    Major,
    Altcoin,
    Volatile,
    Memecoin,
}

impl AssetTier {
    /// The instrument class this tier belongs to.
    pub fn class(&self) -> InstrumentClass {
        match self {
            AssetTier::BlueChip | AssetTier::Growth | AssetTier::Momentum | AssetTier::SmallCap => {
                InstrumentClass::Equity
            }
            AssetTier::Major | AssetTier::Altcoin | AssetTier::Volatile | AssetTier::Memecoin => {
                InstrumentClass::Crypto
            }
        }
    }

    /// Static string representation used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetTier::BlueChip => "blue-chip",
            AssetTier::Growth => "growth",
            AssetTier::Momentum => "momentum",
            AssetTier::SmallCap => "small-cap",
            AssetTier::Major => "major",
            AssetTier::Altcoin => "altcoin",
            AssetTier::Volatile => "volatile",
            AssetTier::Memecoin => "memecoin",
        }
    }
}

impl std::fmt::Display for AssetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instrument at one point in time.
///
/// # Description
/// Complete synthesized market state for a single instrument. All
/// randomized fields are drawn independently per snapshot; the tier
/// determines the sampling range for movement and price scale only and
/// never correlates fields except through the shared `price`.
///
/// Note: the multi-timeframe change fields are independent draws and are
/// NOT internally consistent across timeframes (a 7d change may show a
/// smaller move than a 1h change). This is an accepted property of the
/// synthetic model.
///
/// # Fields
/// * `symbol` - Ticker, unique within a batch.
/// * `name` - Human-readable display name.
/// * `class` - Equity or crypto.
/// * `tier` - Volatility tier that parameterized the synthesis.
/// * `price` - Last trade price, always positive.
/// * `high_24h` / `low_24h` - 24h bracket, `low_24h <= price <= high_24h`.
/// * `change_24h` - Absolute 24h move: `price * change_percent_24h / 100`.
/// * `change_percent_*` - Signed percentage moves per timeframe.
/// * `market_cap` - Capitalization, always positive.
/// * `volume` - 24h volume, typically 5-35% of market cap.
/// * `reason` - Narrative cause selected by the sign of the 24h move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub symbol: String,
    pub name: String,
    pub class: InstrumentClass,
    pub tier: AssetTier,
    pub price: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub change_24h: f64,
    pub change_percent_1h: f64,
    pub change_percent_24h: f64,
    pub change_percent_7d: f64,
    pub change_percent_30d: f64,
    pub market_cap: f64,
    pub volume: f64,
    pub reason: String,
}

impl AssetSnapshot {
    /// Realized intraday volatility as a percentage of price:
    /// `(high - low) / price * 100`.
    pub fn realized_volatility(&self) -> f64 {
        (self.high_24h - self.low_24h) / self.price * 100.0
    }

    /// True when the 24h move is positive.
    pub fn is_positive_trend(&self) -> bool {
        self.change_percent_24h > 0.0
    }

    /// Momentum-times-volatility ranking key used to select chain
    /// underlyings: `|change_percent_24h| * realized_volatility()`.
    pub fn momentum_volatility_rank(&self) -> f64 {
        self.change_percent_24h.abs() * self.realized_volatility()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(price: f64, high: f64, low: f64, change_pct: f64) -> AssetSnapshot {
        AssetSnapshot {
            symbol: "TEST".to_string(),
            name: "Test Asset".to_string(),
            class: InstrumentClass::Equity,
            tier: AssetTier::Growth,
            price,
            high_24h: high,
            low_24h: low,
            change_24h: price * change_pct / 100.0,
            change_percent_1h: 0.5,
            change_percent_24h: change_pct,
            change_percent_7d: 2.0,
            change_percent_30d: 4.0,
            market_cap: 1.0e11,
            volume: 1.0e10,
            reason: "test".to_string(),
        }
    }

    #[test]
    fn test_realized_volatility() {
        let snap = snapshot(100.0, 104.0, 98.0, 3.0);
        assert!((snap.realized_volatility() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_momentum_volatility_rank_uses_absolute_change() {
        let up = snapshot(100.0, 104.0, 98.0, 3.0);
        let down = snapshot(100.0, 104.0, 98.0, -3.0);
        assert_eq!(up.momentum_volatility_rank(), down.momentum_volatility_rank());
        assert!(up.is_positive_trend());
        assert!(!down.is_positive_trend());
    }

    #[test]
    fn test_tier_class_partition() {
        assert_eq!(AssetTier::SmallCap.class(), InstrumentClass::Equity);
        assert_eq!(AssetTier::Memecoin.class(), InstrumentClass::Crypto);
    }

    #[test]
    fn test_tier_serde_names() {
        let json = serde_json::to_string(&AssetTier::BlueChip).unwrap();
        assert_eq!(json, "\"blue-chip\"");
        let tier: AssetTier = serde_json::from_str("\"memecoin\"").unwrap();
        assert_eq!(tier, AssetTier::Memecoin);
    }
}
