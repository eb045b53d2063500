use rust_decimal::prelude::*;

use crate::config::RoundingRule;

/// Apply the configured rounding rule to a raw candidate price.
///
/// Total over finite non-negative input and idempotent for every rule;
/// the orchestrator applies it exactly once, after strategy and fallback
/// resolution. Never returns a negative value.
pub fn apply_rounding(rule: RoundingRule, price: Decimal) -> Decimal {
    let rounded = match rule {
        RoundingRule::None => price,
        RoundingRule::Up99 => up_to_ending(price, Decimal::new(99, 2)),
        RoundingRule::Down99 => down_to_ending(price, Decimal::new(99, 2)),
        RoundingRule::Up95 => up_to_ending(price, Decimal::new(95, 2)),
        RoundingRule::Down95 => down_to_ending(price, Decimal::new(95, 2)),
        RoundingRule::Up10Cent => (price * Decimal::TEN).ceil() / Decimal::TEN,
        RoundingRule::Down10Cent => (price * Decimal::TEN).floor() / Decimal::TEN,
        RoundingRule::NearestDollar => {
            price.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
        RoundingRule::UpDollar => price.ceil(),
    };

    rounded.max(Decimal::ZERO)
}

/// Smallest value with the given cent ending at or above `price`.
fn up_to_ending(price: Decimal, ending: Decimal) -> Decimal {
    let candidate = price.floor() + ending;
    if candidate < price {
        candidate + Decimal::ONE
    } else {
        candidate
    }
}

/// Largest value with the given cent ending at or below `price`.
fn down_to_ending(price: Decimal, ending: Decimal) -> Decimal {
    let candidate = price.floor() + ending;
    if candidate > price {
        candidate - Decimal::ONE
    } else {
        candidate
    }
}
