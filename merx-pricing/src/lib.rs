pub mod config;
pub mod crossvendor;
pub mod engine;
pub mod margin;
pub mod rounding;
pub mod source;
pub mod strategy;

pub use config::{
    ConfigError, FallbackStrategy, PricingConfiguration, PricingStrategy, RoundingRule,
};
pub use crossvendor::{resolve_cross_vendor, ReferenceField};
pub use engine::{PricingEngine, PricingResult};
pub use margin::{margin_from_price, price_from_margin};
pub use rounding::apply_rounding;
pub use source::{CachedQuoteSource, QuoteSource};
pub use strategy::{evaluate_fallback, evaluate_strategy, PriceBasis};
