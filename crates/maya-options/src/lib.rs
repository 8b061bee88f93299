//! # Maya Options Engine
//!
//! Derives a ranked options-contract recommendation set from market
//! snapshots using an approximate pricing model and heuristic scoring.
//!
//! ## Description
//! The engine selects the highest momentum-times-volatility underlyings
//! from a snapshot batch, builds progressively out-of-the-money call and
//! put contracts across the next weekly expirations, estimates premiums
//! and Greeks with documented approximations, and orders the result by
//! recommendation strength times interest level.
//!
//! ### Core Subsystems
//! - **Expiration Schedule**: weekly Friday expiry calendar.
//! - **Approximate Pricing**: premium, breakeven, and potential-return
//!   estimation (intentionally not a closed-form Black-Scholes solver).
//! - **Greek Estimation**: banded, lightly jittered point estimates.
//! - **Scoring**: volatility/trend/time-decay recommendation tiers.
//! - **Chain Synthesis**: the orchestrator tying the parts together.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

pub mod chain;
pub mod expiry;
pub mod greeks;
pub mod pricing;
pub mod reasoning;
pub mod score;

pub use chain::{chain_for_date, synthesize_options_chain};
pub use expiry::{expiration_schedule, format_expiration, next_friday};
pub use greeks::{synthetic_iv, GreekEstimates};
pub use pricing::{approximate_premium, break_even, potential_return, MIN_PREMIUM};
pub use score::{interest_level, recommendation_strength};
