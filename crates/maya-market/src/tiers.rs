//! # Tier Parameter Tables
//!
//! Maps every `(instrument class, tier)` pair to the immutable parameter
//! record that bounds snapshot randomization, plus metric-driven
//! classifiers for assigning a tier from observed figures.
//!
//! ## Description
//! Keeping all range tables in one place keeps classification and
//! synthesis logic together and makes adding a tier a single-file change.
//! Smaller and more volatile tiers get wider movement bounds and lower
//! price/cap scales.

use maya_models::AssetTier;
use serde::{Deserialize, Serialize};

/// Immutable randomization bounds for one volatility tier.
///
/// # Fields
/// * `move_min` / `move_max` - 24h percentage move bounds. The 1h draw
///   uses a third of this range, 7d uses 1.5x, 30d uses 2x.
/// * `price_min` / `price_max` - Spot price bounds in USD.
/// * `cap_min` / `cap_max` - Market capitalization bounds in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub move_min: f64,
    pub move_max: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub cap_min: f64,
    pub cap_max: f64,
}

const BLUE_CHIP: TierProfile = TierProfile {
    move_min: -5.0,
    move_max: 8.0,
    price_min: 100.0,
    price_max: 500.0,
    cap_min: 5.0e11,
    cap_max: 1.5e12,
};

const GROWTH: TierProfile = TierProfile {
    move_min: -8.0,
    move_max: 15.0,
    price_min: 50.0,
    price_max: 350.0,
    cap_min: 5.0e10,
    cap_max: 5.5e11,
};

const MOMENTUM: TierProfile = TierProfile {
    move_min: -12.0,
    move_max: 25.0,
    price_min: 10.0,
    price_max: 110.0,
    cap_min: 5.0e9,
    cap_max: 5.5e10,
};

const SMALL_CAP: TierProfile = TierProfile {
    move_min: -15.0,
    move_max: 35.0,
    price_min: 1.0,
    price_max: 21.0,
    cap_min: 1.0e8,
    cap_max: 5.1e9,
};

const MAJOR: TierProfile = TierProfile {
    move_min: -8.0,
    move_max: 12.0,
    price_min: 1000.0,
    price_max: 2000.0,
    cap_min: 1.0e11,
    cap_max: 6.0e11,
};

const ALTCOIN: TierProfile = TierProfile {
    move_min: -12.0,
    move_max: 20.0,
    price_min: 5.0,
    price_max: 105.0,
    cap_min: 5.0e9,
    cap_max: 5.5e10,
};

const VOLATILE: TierProfile = TierProfile {
    move_min: -15.0,
    move_max: 30.0,
    price_min: 1.0,
    price_max: 51.0,
    cap_min: 5.0e8,
    cap_max: 5.5e9,
};

const MEMECOIN: TierProfile = TierProfile {
    move_min: -20.0,
    move_max: 45.0,
    price_min: 0.000001,
    price_max: 1.0,
    cap_min: 5.0e7,
    cap_max: 1.05e9,
};

/// Looks up the randomization bounds for a tier.
pub fn tier_profile(tier: AssetTier) -> &'static TierProfile {
    match tier {
        AssetTier::BlueChip => &BLUE_CHIP,
        AssetTier::Growth => &GROWTH,
        AssetTier::Momentum => &MOMENTUM,
        AssetTier::SmallCap => &SMALL_CAP,
        AssetTier::Major => &MAJOR,
        AssetTier::Altcoin => &ALTCOIN,
        AssetTier::Volatile => &VOLATILE,
        AssetTier::Memecoin => &MEMECOIN,
    }
}

/// Classifies an equity tier from observed figures.
///
/// # Parameters
/// * `price` - Last trade price in USD.
/// * `volume` - 24h traded volume in shares.
/// * `market_cap` - Capitalization in USD.
pub fn classify_equity(price: f64, volume: f64, market_cap: f64) -> AssetTier {
    if market_cap > 2.0e11 {
        AssetTier::BlueChip
    } else if market_cap > 5.0e10 {
        AssetTier::Growth
    } else if volume > 1.0e7 && price > 20.0 {
        AssetTier::Momentum
    } else {
        AssetTier::SmallCap
    }
}

/// Classifies a crypto tier from symbol and capitalization.
///
/// BTC and ETH are majors regardless of cap; the flagship memecoins are
/// pinned by symbol since their caps overlap the altcoin band.
pub fn classify_crypto(symbol: &str, market_cap: f64) -> AssetTier {
    match symbol {
        "BTC" | "ETH" => AssetTier::Major,
        "DOGE" | "SHIB" => AssetTier::Memecoin,
        _ if market_cap > 1.0e10 => AssetTier::Altcoin,
        _ => AssetTier::Volatile,
    }
}
