//! # Movement Reason Corpus
//!
//! Fixed narrative corpora explaining a price move, keyed by its sign.
//! Selection is a pure lookup plus one random pick.

use rand::Rng;

/// Plausible causes for an upward move.
pub const POSITIVE_REASONS: [&str; 10] = [
    "Strong quarterly earnings exceeding analyst expectations by 15%",
    "New product launch receiving overwhelmingly positive consumer response",
    "Major partnership announced with industry leader for expansion",
    "Massive surge in institutional buying detected on exchange data",
    "Regulatory approval for expansion into previously restricted markets",
    "Analyst upgrades with price target 40% above current levels",
    "Technical breakout from 6-month consolidation pattern on high volume",
    "Short squeeze developing with 35% of float currently shorted",
    "Industry disruption from new technology announcement",
    "Successful cost-cutting initiative improving margins substantially",
];

/// Plausible causes for a downward move.
pub const NEGATIVE_REASONS: [&str; 10] = [
    "Missed earnings expectations with revenue down 12% year-over-year",
    "Analyst downgrade citing concerns about market saturation",
    "SEC investigation announced regarding accounting practices",
    "Major competitor released superior product at lower price point",
    "Technical breakdown below key support levels on high volume",
    "Rising costs and supply chain issues impacting profitability",
    "CEO unexpected resignation raising questions about leadership",
    "Failed clinical trial for flagship product in development",
    "Market share losses to emerging competitors in key regions",
    "Dividend cut announced to preserve cash amid challenging conditions",
];

/// Picks a reason matching the sign of the 24h move.
///
/// A flat move (exactly zero) reads as non-positive and draws from the
/// negative corpus.
pub fn pick_reason<R: Rng>(change_percent_24h: f64, rng: &mut R) -> &'static str {
    let corpus: &[&'static str] = if change_percent_24h > 0.0 {
        &POSITIVE_REASONS
    } else {
        &NEGATIVE_REASONS
    };
    corpus[rng.gen_range(0..corpus.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_reason_follows_move_sign() {
        let mut rng = Pcg64::seed_from_u64(1);
        for _ in 0..32 {
            assert!(POSITIVE_REASONS.contains(&pick_reason(4.2, &mut rng)));
            assert!(NEGATIVE_REASONS.contains(&pick_reason(-4.2, &mut rng)));
        }
    }

    #[test]
    fn test_flat_move_reads_as_negative() {
        let mut rng = Pcg64::seed_from_u64(2);
        assert!(NEGATIVE_REASONS.contains(&pick_reason(0.0, &mut rng)));
    }
}
