use merx_shared::PriceQuote;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfiguration;
use crate::crossvendor::{resolve_cross_vendor, ReferenceField};
use crate::margin::margin_from_price;
use crate::rounding::apply_rounding;
use crate::strategy::{evaluate_fallback, evaluate_strategy, PriceBasis};

/// Outcome of one retail price calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingResult {
    /// Final retail price; absent when no strategy could resolve one.
    pub price: Option<Decimal>,
    /// Gross margin at that price; absent whenever the price is absent or
    /// zero, or the vendor cost is unknown.
    pub margin_percent: Option<Decimal>,
    /// Which strategy/fallback/rounding path produced the result.
    pub explanation: String,
}

/// Derives retail prices from vendor quotes under one tenant
/// configuration.
///
/// Pure and synchronous: every call reads only its inputs and produces a
/// fresh result, so one engine can be shared across request handlers
/// without coordination. Identical inputs yield identical results.
pub struct PricingEngine {
    config: PricingConfiguration,
}

impl PricingEngine {
    pub fn new(config: PricingConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfiguration {
        &self.config
    }

    /// Compute the retail price for the chosen vendor's figures, with
    /// `all_quotes` available for cross-vendor substitution of a missing
    /// MSRP/MAP.
    pub fn compute_retail_price(
        &self,
        primary: &PriceQuote,
        all_quotes: &[PriceQuote],
    ) -> PricingResult {
        let cost = primary.parsed_cost();
        let vendor_msrp = primary.parsed_msrp();
        let vendor_map = primary.parsed_map();

        // Cross-vendor resolution only runs for fields the configuration
        // actually reads.
        let cross_vendor = self.config.use_cross_vendor_fallback;
        let effective_msrp = resolve_cross_vendor(
            ReferenceField::Msrp,
            vendor_msrp,
            all_quotes,
            cross_vendor && self.config.references_msrp(),
        );
        let effective_map = resolve_cross_vendor(
            ReferenceField::Map,
            vendor_map,
            all_quotes,
            cross_vendor && self.config.references_map(),
        );
        let msrp_substituted = vendor_msrp.is_none() && effective_msrp.is_some();
        let map_substituted = vendor_map.is_none() && effective_map.is_some();

        let primary_outcome = evaluate_strategy(
            &self.config,
            cost,
            effective_msrp,
            effective_map,
            primary.is_marketplace(),
        );

        let (raw_price, basis, via_fallback) = match primary_outcome {
            Some((price, basis)) => (price, basis, false),
            None => {
                tracing::debug!(
                    "Strategy {} produced no price for vendor {}, consulting fallback {}",
                    self.config.strategy,
                    primary.vendor_id,
                    self.config.fallback_strategy
                );
                match evaluate_fallback(&self.config, cost, effective_msrp, effective_map) {
                    Some((price, basis)) => (price, basis, true),
                    None => {
                        return PricingResult {
                            price: None,
                            margin_percent: None,
                            explanation: "Price calculation requires configuration".to_string(),
                        }
                    }
                }
            }
        };

        let price = apply_rounding(self.config.rounding_rule, raw_price);
        let margin_percent = margin_from_price(Some(price), cost);
        let explanation = self.explain(&basis, via_fallback, msrp_substituted, map_substituted);

        PricingResult {
            price: Some(price),
            margin_percent,
            explanation,
        }
    }

    fn explain(
        &self,
        basis: &PriceBasis,
        via_fallback: bool,
        msrp_substituted: bool,
        map_substituted: bool,
    ) -> String {
        let substituted = match basis {
            PriceBasis::Msrp | PriceBasis::MsrpDiscount { .. } => msrp_substituted,
            PriceBasis::Map | PriceBasis::MapPremium { .. } => map_substituted,
            _ => false,
        };

        let mut explanation = if via_fallback {
            format!("Fallback: {}", basis)
        } else {
            basis.to_string()
        };
        if substituted {
            explanation.push_str(" (cross-vendor)");
        }
        if let Some(label) = self.config.rounding_rule.describe() {
            explanation.push_str(", ");
            explanation.push_str(label);
        }
        explanation
    }
}
