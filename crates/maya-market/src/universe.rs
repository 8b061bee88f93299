//! # Instrument Universe
//!
//! Static tables of the instruments covered by the synthetic market, with
//! their display names and volatility tier assignments.

use maya_models::{AssetTier, InstrumentClass};

/// One entry in the instrument universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    pub symbol: &'static str,
    pub name: &'static str,
    pub tier: AssetTier,
}

const fn instrument(symbol: &'static str, name: &'static str, tier: AssetTier) -> Instrument {
    Instrument { symbol, name, tier }
}

/// Equity universe: a mix of blue chips, growth names, momentum plays,
/// and small caps with potential for outsized moves.
pub const EQUITY_UNIVERSE: [Instrument; 15] = [
    instrument("AAPL", "Apple Inc.", AssetTier::BlueChip),
    instrument("MSFT", "Microsoft Corporation", AssetTier::BlueChip),
    instrument("GOOGL", "Alphabet Inc.", AssetTier::BlueChip),
    instrument("NVDA", "NVIDIA Corporation", AssetTier::Growth),
    instrument("AMD", "Advanced Micro Devices", AssetTier::Growth),
    instrument("PLTR", "Palantir Technologies", AssetTier::Momentum),
    instrument("UPST", "Upstart Holdings", AssetTier::Momentum),
    instrument("RIVN", "Rivian Automotive", AssetTier::Momentum),
    instrument("LCID", "Lucid Group", AssetTier::Momentum),
    instrument("MARA", "Marathon Digital Holdings", AssetTier::Momentum),
    instrument("BNGO", "Bionano Genomics", AssetTier::SmallCap),
    instrument("SKLZ", "Skillz Inc.", AssetTier::SmallCap),
    instrument("VXRT", "Vaxart Inc.", AssetTier::SmallCap),
    instrument("TLRY", "Tilray Brands", AssetTier::SmallCap),
    instrument("BB", "BlackBerry Limited", AssetTier::SmallCap),
];

/// Crypto universe: majors, mid-cap altcoins, volatile smaller coins,
/// and high-volatility memecoins.
pub const CRYPTO_UNIVERSE: [Instrument; 15] = [
    instrument("BTC", "Bitcoin", AssetTier::Major),
    instrument("ETH", "Ethereum", AssetTier::Major),
    instrument("SOL", "Solana", AssetTier::Altcoin),
    instrument("ADA", "Cardano", AssetTier::Altcoin),
    instrument("DOT", "Polkadot", AssetTier::Altcoin),
    instrument("AVAX", "Avalanche", AssetTier::Volatile),
    instrument("MATIC", "Polygon", AssetTier::Volatile),
    instrument("ATOM", "Cosmos", AssetTier::Volatile),
    instrument("LRC", "Loopring", AssetTier::Volatile),
    instrument("NEAR", "NEAR Protocol", AssetTier::Volatile),
    instrument("DOGE", "Dogecoin", AssetTier::Memecoin),
    instrument("SHIB", "Shiba Inu", AssetTier::Memecoin),
    instrument("PEPE", "Pepe Coin", AssetTier::Memecoin),
    instrument("FLOKI", "Floki Inu", AssetTier::Memecoin),
    instrument("BONK", "Bonk", AssetTier::Memecoin),
];

/// The default universe for an instrument class.
pub fn default_universe(class: InstrumentClass) -> &'static [Instrument] {
    match class {
        InstrumentClass::Equity => &EQUITY_UNIVERSE,
        InstrumentClass::Crypto => &CRYPTO_UNIVERSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_unique_within_universe() {
        for class in [InstrumentClass::Equity, InstrumentClass::Crypto] {
            let universe = default_universe(class);
            let symbols: HashSet<&str> = universe.iter().map(|i| i.symbol).collect();
            assert_eq!(symbols.len(), universe.len());
        }
    }

    #[test]
    fn test_tiers_match_instrument_class() {
        for inst in &EQUITY_UNIVERSE {
            assert_eq!(inst.tier.class(), InstrumentClass::Equity, "{}", inst.symbol);
        }
        for inst in &CRYPTO_UNIVERSE {
            assert_eq!(inst.tier.class(), InstrumentClass::Crypto, "{}", inst.symbol);
        }
    }
}
