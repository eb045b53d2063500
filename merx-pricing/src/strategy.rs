use rust_decimal::Decimal;
use std::fmt;

use crate::config::{default_percentage, FallbackStrategy, PricingConfiguration, PricingStrategy};

/// The path that produced a candidate price. Rendered verbatim into
/// `PricingResult::explanation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceBasis {
    Msrp,
    Map,
    CostMarkup { percent: Decimal },
    TargetMargin { percent: Decimal },
    MapPremium { premium: Decimal },
    MsrpDiscount { percent: Decimal },
    MarketplaceAsk,
}

impl fmt::Display for PriceBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msrp => write!(f, "MSRP"),
            Self::Map => write!(f, "MAP"),
            Self::CostMarkup { percent } => write!(f, "cost plus {}% markup", percent),
            Self::TargetMargin { percent } => write!(f, "{}% target margin", percent),
            Self::MapPremium { premium } => write!(f, "MAP plus ${} premium", premium),
            Self::MsrpDiscount { percent } => write!(f, "MSRP less {}% discount", percent),
            Self::MarketplaceAsk => write!(f, "marketplace asking price"),
        }
    }
}

/// A candidate below zero is not a sellable price.
fn usable(price: Decimal, basis: PriceBasis) -> Option<(Decimal, PriceBasis)> {
    (price >= Decimal::ZERO).then_some((price, basis))
}

fn cost_markup(cost: Option<Decimal>, percent: Decimal) -> Option<(Decimal, PriceBasis)> {
    let cost = cost?;
    let price = cost * (Decimal::ONE + percent / Decimal::ONE_HUNDRED);
    usable(price, PriceBasis::CostMarkup { percent })
}

fn target_margin(cost: Option<Decimal>, percent: Decimal) -> Option<(Decimal, PriceBasis)> {
    let cost = cost?;
    // A margin of 100% or more has no finite price.
    if percent >= Decimal::ONE_HUNDRED {
        return None;
    }
    let price = cost / (Decimal::ONE - percent / Decimal::ONE_HUNDRED);
    usable(price, PriceBasis::TargetMargin { percent })
}

/// Apply the configured strategy to one vendor's figures.
///
/// `effective_msrp`/`effective_map` are the post-cross-vendor values. For
/// marketplace listings the cost already is the live asking price, so the
/// four markup-style strategies short-circuit to it before any formula
/// dispatch; `msrp`/`map` ignore the flag.
///
/// Strategies that read a suggested price carry an implicit cost-markup
/// substitute for when that field is absent; it engages only when the
/// tenant has not configured an explicit fallback strategy, which
/// otherwise takes precedence.
pub fn evaluate_strategy(
    config: &PricingConfiguration,
    cost: Option<Decimal>,
    effective_msrp: Option<Decimal>,
    effective_map: Option<Decimal>,
    is_marketplace: bool,
) -> Option<(Decimal, PriceBasis)> {
    if is_marketplace && config.strategy.follows_marketplace_ask() {
        return cost.map(|ask| (ask, PriceBasis::MarketplaceAsk));
    }

    let implicit_substitute = |cost| {
        if config.fallback_strategy == FallbackStrategy::None {
            cost_markup(cost, config.markup_or_default())
        } else {
            None
        }
    };

    match config.strategy {
        PricingStrategy::Msrp => match effective_msrp {
            Some(msrp) => Some((msrp, PriceBasis::Msrp)),
            None => implicit_substitute(cost),
        },
        PricingStrategy::Map => match effective_map {
            Some(map) => Some((map, PriceBasis::Map)),
            None => implicit_substitute(cost),
        },
        PricingStrategy::PercentageMarkup => cost_markup(cost, config.markup_or_default()),
        PricingStrategy::TargetedMargin => target_margin(cost, config.target_margin_or_default()),
        PricingStrategy::PremiumOverMap => match effective_map {
            Some(map) => {
                let premium = config.premium_or_default();
                usable(map + premium, PriceBasis::MapPremium { premium })
            }
            None => implicit_substitute(cost),
        },
        PricingStrategy::DiscountToMsrp => match effective_msrp {
            Some(msrp) => {
                let percent = config.discount_or_default();
                let price = msrp * (Decimal::ONE - percent / Decimal::ONE_HUNDRED);
                usable(price, PriceBasis::MsrpDiscount { percent })
            }
            None => implicit_substitute(cost),
        },
    }
}

/// Secondary strategy, consulted only when the primary yields no price.
///
/// `msrp`/`map` here do not cascade any further; a missing field simply
/// means no price. `cost_margin` has no math of its own and is evaluated
/// as a targeted margin at the engine default.
pub fn evaluate_fallback(
    config: &PricingConfiguration,
    cost: Option<Decimal>,
    effective_msrp: Option<Decimal>,
    effective_map: Option<Decimal>,
) -> Option<(Decimal, PriceBasis)> {
    match config.fallback_strategy {
        FallbackStrategy::None => None,
        FallbackStrategy::Msrp => effective_msrp.map(|msrp| (msrp, PriceBasis::Msrp)),
        FallbackStrategy::Map => effective_map.map(|map| (map, PriceBasis::Map)),
        FallbackStrategy::CostMarkup => cost_markup(cost, config.fallback_markup_or_default()),
        FallbackStrategy::CostMargin => target_margin(cost, default_percentage()),
    }
}
