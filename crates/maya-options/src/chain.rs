//! # Options Chain Synthesizer
//!
//! Orchestrates expiry scheduling, pricing, Greek estimation, and scoring
//! into a flat, ranked list of contract recommendations.
//!
//! ## Description
//! The synthesizer ranks a snapshot batch by momentum times realized
//! volatility, keeps the top underlyings, and walks the next weekly
//! expirations for each. Strikes step progressively further
//! out-of-the-money with each expiration index. A call is emitted when
//! the trend is positive or volatility is elevated; a put when the trend
//! is negative or volatility is elevated. The final list is ordered by
//! recommendation strength times interest level, descending.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use chrono::{NaiveDate, Utc};
use maya_models::{AssetSnapshot, ContractType, OptionContract, CONTRACT_SIZE};
use rand::Rng;
use tracing::info;

use crate::expiry::expiration_schedule;
use crate::greeks::{synthetic_iv, GreekEstimates};
use crate::pricing::{approximate_premium, break_even, potential_return};
use crate::reasoning::contract_reasoning;
use crate::score::{interest_level, recommendation_strength};

/// Number of underlyings selected from the snapshot batch.
pub const TOP_UNDERLYINGS: usize = 5;

/// Number of weekly expirations walked per underlying.
pub const CHAIN_EXPIRATIONS: usize = 3;

/// Volatility above which both contract directions are emitted
/// regardless of trend.
const HIGH_VOL_THRESHOLD: f64 = 5.0;

/// Base out-of-the-money strike offset for the nearest expiration.
const STRIKE_BASE_OFFSET: f64 = 0.02;

/// Additional strike offset per expiration index.
const STRIKE_STEP_OFFSET: f64 = 0.015;

/// Derives a ranked contract recommendation set from market snapshots.
///
/// This is the primary external entry point; it anchors the expiration
/// schedule to today's date. An empty snapshot list yields an empty chain.
///
/// # Parameters
/// * `snapshots` - Snapshot batch to derive from (equity by convention).
/// * `rng` - Random source consumed by jittered estimates.
pub fn synthesize_options_chain<R: Rng>(
    snapshots: &[AssetSnapshot],
    rng: &mut R,
) -> Vec<OptionContract> {
    chain_for_date(snapshots, Utc::now().date_naive(), rng)
}

/// Derives a ranked contract recommendation set anchored to an explicit
/// reference date. Exposed separately so tests stay calendar-independent.
pub fn chain_for_date<R: Rng>(
    snapshots: &[AssetSnapshot],
    reference_date: NaiveDate,
    rng: &mut R,
) -> Vec<OptionContract> {
    if snapshots.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<&AssetSnapshot> = snapshots.iter().collect();
    ranked.sort_by(|a, b| {
        b.momentum_volatility_rank()
            .total_cmp(&a.momentum_volatility_rank())
    });

    let expirations = expiration_schedule(CHAIN_EXPIRATIONS, reference_date);
    let mut contracts = Vec::new();

    for snapshot in ranked.into_iter().take(TOP_UNDERLYINGS) {
        let trend_positive = snapshot.is_positive_trend();
        let volatility = snapshot.realized_volatility();

        for (index, &expiry) in expirations.iter().enumerate() {
            let days_to_expiration = (expiry - reference_date).num_days();
            let strike_offset = STRIKE_BASE_OFFSET + STRIKE_STEP_OFFSET * index as f64;

            if trend_positive || volatility > HIGH_VOL_THRESHOLD {
                let strike = snapshot.price * (1.0 + strike_offset);
                contracts.push(build_contract(
                    snapshot,
                    ContractType::Call,
                    strike,
                    expiry,
                    days_to_expiration,
                    volatility,
                    trend_positive,
                    rng,
                ));
            }

            if !trend_positive || volatility > HIGH_VOL_THRESHOLD {
                let strike = snapshot.price * (1.0 - strike_offset);
                contracts.push(build_contract(
                    snapshot,
                    ContractType::Put,
                    strike,
                    expiry,
                    days_to_expiration,
                    volatility,
                    trend_positive,
                    rng,
                ));
            }
        }
    }

    contracts.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));

    info!(
        contracts = contracts.len(),
        underlyings = snapshots.len().min(TOP_UNDERLYINGS),
        "synthesized options chain"
    );

    contracts
}

#[allow(clippy::too_many_arguments)]
fn build_contract<R: Rng>(
    snapshot: &AssetSnapshot,
    contract_type: ContractType,
    strike: f64,
    expiry: NaiveDate,
    days_to_expiration: i64,
    volatility: f64,
    trend_positive: bool,
    rng: &mut R,
) -> OptionContract {
    let spot = snapshot.price;
    let premium = approximate_premium(spot, strike, days_to_expiration, volatility, contract_type);
    let greeks = match contract_type {
        ContractType::Call => {
            GreekEstimates::for_call(spot, strike, volatility, days_to_expiration, rng)
        }
        ContractType::Put => {
            GreekEstimates::for_put(spot, strike, volatility, days_to_expiration, rng)
        }
    };

    let trend_aligned = match contract_type {
        ContractType::Call => trend_positive,
        ContractType::Put => !trend_positive,
    };

    // Calls carry a wider heuristic payoff band than puts.
    let risk_reward_ratio = match contract_type {
        ContractType::Call => rng.gen_range(3.0..5.0),
        ContractType::Put => rng.gen_range(2.5..3.0),
    };

    OptionContract {
        symbol: snapshot.symbol.clone(),
        contract_type,
        strike_price: strike,
        expiration_date: expiry,
        days_to_expiration,
        premium,
        contract_size: CONTRACT_SIZE,
        total_cost: premium * CONTRACT_SIZE as f64,
        spot_price: spot,
        break_even_price: break_even(strike, premium, contract_type),
        implied_volatility: synthetic_iv(volatility, rng),
        delta: greeks.delta,
        theta: greeks.theta,
        gamma: greeks.gamma,
        vega: greeks.vega,
        potential_return: potential_return(premium, spot, strike, contract_type),
        risk_reward_ratio,
        recommendation: recommendation_strength(volatility, days_to_expiration, trend_aligned),
        interest_level: interest_level(volatility, snapshot.change_percent_24h.abs()),
        reasoning: contract_reasoning(
            &snapshot.symbol,
            snapshot.change_percent_24h,
            days_to_expiration,
            contract_type,
            volatility,
        ),
    }
}
