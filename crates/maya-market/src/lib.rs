//! # Maya Market Synthesizer
//!
//! Tiered stochastic synthesis of market snapshots.
//!
//! ## Description
//! Generates one complete, independent batch of [`maya_models::AssetSnapshot`]
//! per call. Each instrument's volatility tier selects an immutable
//! parameter record ([`tiers::TierProfile`]) that bounds every random draw;
//! the batch is returned ordered by absolute 24h move, descending.
//!
//! All synthesis is pure given its random source: callers thread a
//! [`rand::Rng`] through every call, so a seeded generator reproduces a
//! batch bit-for-bit while production callers pass an entropy-seeded one.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

pub mod reasons;
pub mod synth;
pub mod tiers;
pub mod universe;

pub use synth::{synthesize, synthesize_snapshots};
pub use tiers::{classify_crypto, classify_equity, tier_profile, TierProfile};
pub use universe::{default_universe, Instrument, CRYPTO_UNIVERSE, EQUITY_UNIVERSE};
