//! # Market Snapshot Synthesizer
//!
//! Draws one complete batch of tier-scaled market snapshots.
//!
//! ## Description
//! Each invocation produces a fresh, independent batch: no caching, no
//! incremental update, no shared state between calls. The tier profile
//! bounds every draw; all fields are sampled independently. The
//! multi-timeframe change fields deliberately remain mutually
//! inconsistent (each is its own draw over a scaled range).
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use maya_models::{AssetSnapshot, InstrumentClass};
use rand::Rng;
use tracing::{debug, info};

use crate::reasons::pick_reason;
use crate::tiers::tier_profile;
use crate::universe::{default_universe, Instrument};

/// Synthesizes a snapshot batch for the default universe of a class.
///
/// This is the primary external entry point consumed by presentation
/// layers and by the options chain synthesizer.
///
/// # Parameters
/// * `class` - Asset class selecting the built-in universe.
/// * `rng` - Random source; seed it for reproducible batches.
///
/// # Returns
/// Snapshots ordered descending by absolute 24h percentage move.
pub fn synthesize_snapshots<R: Rng>(class: InstrumentClass, rng: &mut R) -> Vec<AssetSnapshot> {
    synthesize(class, default_universe(class), rng)
}

/// Synthesizes a snapshot batch for an explicit instrument list.
///
/// # Parameters
/// * `class` - Asset class recorded on every snapshot.
/// * `instruments` - Instruments to synthesize; an empty list yields an
///   empty batch.
/// * `rng` - Random source; seed it for reproducible batches.
///
/// # Returns
/// Snapshots ordered descending by absolute 24h percentage move.
pub fn synthesize<R: Rng>(
    class: InstrumentClass,
    instruments: &[Instrument],
    rng: &mut R,
) -> Vec<AssetSnapshot> {
    if instruments.is_empty() {
        return Vec::new();
    }

    info!(class = %class, count = instruments.len(), "synthesizing market snapshot batch");

    let mut batch: Vec<AssetSnapshot> = instruments
        .iter()
        .map(|inst| synthesize_one(class, inst, rng))
        .collect();

    batch.sort_by(|a, b| {
        b.change_percent_24h
            .abs()
            .total_cmp(&a.change_percent_24h.abs())
    });

    if let Some(top) = batch.first() {
        debug!(symbol = %top.symbol, change = top.change_percent_24h, "top mover");
    }

    batch
}

fn synthesize_one<R: Rng>(class: InstrumentClass, inst: &Instrument, rng: &mut R) -> AssetSnapshot {
    let profile = tier_profile(inst.tier);

    // Independent draws per timeframe: 1h over a third of the 24h range,
    // 7d over 1.5x, 30d over 2x.
    let change_percent_1h = rng.gen_range(profile.move_min / 3.0..profile.move_max / 3.0);
    let change_percent_24h = rng.gen_range(profile.move_min..profile.move_max);
    let change_percent_7d = rng.gen_range(profile.move_min * 1.5..profile.move_max * 1.5);
    let change_percent_30d = rng.gen_range(profile.move_min * 2.0..profile.move_max * 2.0);

    let price = draw_price(inst, rng);
    let change_24h = price * change_percent_24h / 100.0;

    let market_cap = rng.gen_range(profile.cap_min..profile.cap_max);
    let volume = market_cap * rng.gen_range(0.05..0.35);

    let high_24h = price * (1.0 + rng.gen_range(0.0..0.05));
    let low_24h = price * (1.0 - rng.gen_range(0.0..0.05));

    let reason = pick_reason(change_percent_24h, rng).to_string();

    AssetSnapshot {
        symbol: inst.symbol.to_string(),
        name: inst.name.to_string(),
        class,
        tier: inst.tier,
        price,
        high_24h,
        low_24h,
        change_24h,
        change_percent_1h,
        change_percent_24h,
        change_percent_7d,
        change_percent_30d,
        market_cap,
        volume,
        reason,
    }
}

/// Draws a spot price from the tier's range. BTC is the one symbol with
/// its own band: it trades an order of magnitude above the other majors.
fn draw_price<R: Rng>(inst: &Instrument, rng: &mut R) -> f64 {
    if inst.symbol == "BTC" {
        return rng.gen_range(30_000.0..40_000.0);
    }
    let profile = tier_profile(inst.tier);
    rng.gen_range(profile.price_min..profile.price_max)
}
