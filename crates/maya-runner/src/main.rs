//! # Maya Market Runner
//!
//! Demo entry point for the Maya synthetic market and options engine.
//!
//! ## Description
//! Wires the pure core together: loads a TOML configuration, seeds the
//! random source (explicitly for reproducible runs, from entropy
//! otherwise), synthesizes a snapshot batch, and reports the top movers
//! plus the ranked options recommendations.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use anyhow::Context;
use clap::Parser;
use maya_market::synthesize_snapshots;
use maya_models::{AssetSnapshot, InstrumentClass, OptionContract};
use maya_options::{format_expiration, synthesize_options_chain};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::Deserialize;
use std::fs;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "maya", about = "Synthetic market simulation and options decision engine")]
struct Cli {
    /// Path to the runner configuration file.
    #[arg(long, default_value = "configs/maya.toml")]
    config: String,
    /// Override the RNG seed from the config.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Config {
    market: MarketConfig,
}

#[derive(Debug, Deserialize)]
struct MarketConfig {
    asset_class: InstrumentClass,
    seed: Option<u64>,
    #[serde(default = "default_options_chain")]
    options_chain: bool,
}

fn default_options_chain() -> bool {
    true
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let config_str = fs::read_to_string(&cli.config)
        .with_context(|| format!("could not read config {}", cli.config))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("failed to parse {}", cli.config))?;
    let market = config.market;

    let seed = cli.seed.or(market.seed);
    let mut rng = match seed {
        Some(s) => {
            info!(seed = s, "using seeded random source");
            Pcg64::seed_from_u64(s)
        }
        None => Pcg64::from_entropy(),
    };

    info!("═══════════════════════════════════════════");
    info!("        Maya Market Engine v0.2            ");
    info!("═══════════════════════════════════════════");

    let snapshots = synthesize_snapshots(market.asset_class, &mut rng);
    report_snapshots(market.asset_class, &snapshots);

    if market.options_chain && market.asset_class == InstrumentClass::Equity {
        let chain = synthesize_options_chain(&snapshots, &mut rng);
        report_chain(&chain);
    }

    Ok(())
}

fn report_snapshots(class: InstrumentClass, snapshots: &[AssetSnapshot]) {
    info!("───────────────────────────────────────────");
    info!("  Top {} movers ({})", snapshots.len().min(5), class);
    info!("───────────────────────────────────────────");
    for snap in snapshots.iter().take(5) {
        info!(
            "{:<6} {:>12.4} {:>+7.2}%  [{}]  {}",
            snap.symbol, snap.price, snap.change_percent_24h, snap.tier, snap.reason
        );
    }
}

fn report_chain(chain: &[OptionContract]) {
    info!("───────────────────────────────────────────");
    info!("  Ranked options recommendations ({} contracts)", chain.len());
    info!("───────────────────────────────────────────");
    for contract in chain.iter().take(10) {
        info!(
            "{:<6} {:<4} strike {:>8.2} exp {:<10} premium {:>7.2} Δ {:>+5.2}  {} (interest {})",
            contract.symbol,
            contract.contract_type,
            contract.strike_price,
            format_expiration(contract.expiration_date),
            contract.premium,
            contract.delta,
            contract.recommendation,
            contract.interest_level
        );
    }
}
