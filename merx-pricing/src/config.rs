use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A structurally invalid configuration token.
///
/// Missing numeric parameters fall back to documented defaults; an
/// unrecognized token is an authoring error and is rejected outright.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unrecognized pricing strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unrecognized fallback strategy: {0}")]
    UnknownFallback(String),

    #[error("Unrecognized rounding rule: {0}")]
    UnknownRoundingRule(String),
}

/// Default for markup and margin percentages left unset by the tenant.
pub(crate) fn default_percentage() -> Decimal {
    Decimal::new(20, 0)
}

/// Retail pricing strategy selected by the tenant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingStrategy {
    Msrp,
    Map,
    PercentageMarkup,
    TargetedMargin,
    PremiumOverMap,
    DiscountToMsrp,
}

impl PricingStrategy {
    /// Whether a marketplace listing's live ask replaces this strategy's
    /// math. `msrp` and `map` read the suggested price regardless of
    /// listing type.
    pub fn follows_marketplace_ask(self) -> bool {
        matches!(
            self,
            Self::PercentageMarkup | Self::TargetedMargin | Self::PremiumOverMap | Self::DiscountToMsrp
        )
    }
}

impl FromStr for PricingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msrp" => Ok(Self::Msrp),
            "map" => Ok(Self::Map),
            "percentage_markup" => Ok(Self::PercentageMarkup),
            "targeted_margin" => Ok(Self::TargetedMargin),
            "premium_over_map" => Ok(Self::PremiumOverMap),
            "discount_to_msrp" => Ok(Self::DiscountToMsrp),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Msrp => "msrp",
            Self::Map => "map",
            Self::PercentageMarkup => "percentage_markup",
            Self::TargetedMargin => "targeted_margin",
            Self::PremiumOverMap => "premium_over_map",
            Self::DiscountToMsrp => "discount_to_msrp",
        };
        write!(f, "{}", token)
    }
}

/// Secondary strategy, consulted only when the primary yields no price.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    #[default]
    None,
    Map,
    Msrp,
    CostMarkup,
    CostMargin,
}

impl FromStr for FallbackStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "map" => Ok(Self::Map),
            "msrp" => Ok(Self::Msrp),
            "cost_markup" => Ok(Self::CostMarkup),
            "cost_margin" => Ok(Self::CostMargin),
            other => Err(ConfigError::UnknownFallback(other.to_string())),
        }
    }
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::None => "none",
            Self::Map => "map",
            Self::Msrp => "msrp",
            Self::CostMarkup => "cost_markup",
            Self::CostMargin => "cost_margin",
        };
        write!(f, "{}", token)
    }
}

/// Psychological-price rounding applied once, after strategy resolution.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    #[default]
    None,
    #[serde(rename = "up_99")]
    Up99,
    #[serde(rename = "down_99")]
    Down99,
    #[serde(rename = "up_95")]
    Up95,
    #[serde(rename = "down_95")]
    Down95,
    #[serde(rename = "up_10cent")]
    Up10Cent,
    #[serde(rename = "down_10cent")]
    Down10Cent,
    NearestDollar,
    UpDollar,
}

impl RoundingRule {
    /// Human-readable label for result explanations; `None` for the
    /// identity rule.
    pub fn describe(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Up99 => Some("rounded up to .99"),
            Self::Down99 => Some("rounded down to .99"),
            Self::Up95 => Some("rounded up to .95"),
            Self::Down95 => Some("rounded down to .95"),
            Self::Up10Cent => Some("rounded up to the next $0.10"),
            Self::Down10Cent => Some("rounded down to the previous $0.10"),
            Self::NearestDollar => Some("rounded to the nearest dollar"),
            Self::UpDollar => Some("rounded up to the next dollar"),
        }
    }
}

impl FromStr for RoundingRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "up_99" => Ok(Self::Up99),
            "down_99" => Ok(Self::Down99),
            "up_95" => Ok(Self::Up95),
            "down_95" => Ok(Self::Down95),
            "up_10cent" => Ok(Self::Up10Cent),
            "down_10cent" => Ok(Self::Down10Cent),
            "nearest_dollar" => Ok(Self::NearestDollar),
            "up_dollar" => Ok(Self::UpDollar),
            other => Err(ConfigError::UnknownRoundingRule(other.to_string())),
        }
    }
}

impl fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::None => "none",
            Self::Up99 => "up_99",
            Self::Down99 => "down_99",
            Self::Up95 => "up_95",
            Self::Down95 => "down_95",
            Self::Up10Cent => "up_10cent",
            Self::Down10Cent => "down_10cent",
            Self::NearestDollar => "nearest_dollar",
            Self::UpDollar => "up_dollar",
        };
        write!(f, "{}", token)
    }
}

/// Tenant-scoped retail pricing rules.
///
/// Created and edited by tenant administrators; the engine treats one
/// record as an immutable value for the duration of a calculation. The
/// caller hands the engine the record flagged `is_default` (or an
/// explicitly chosen one) — exactly one default per tenant is enforced
/// upstream, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfiguration {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub strategy: PricingStrategy,
    #[serde(default)]
    pub markup_percentage: Option<Decimal>,
    #[serde(default)]
    pub target_margin_percentage: Option<Decimal>,
    #[serde(default)]
    pub premium_amount: Option<Decimal>,
    #[serde(default)]
    pub discount_percentage: Option<Decimal>,
    #[serde(default)]
    pub fallback_strategy: FallbackStrategy,
    #[serde(default)]
    pub fallback_markup_percentage: Option<Decimal>,
    #[serde(default)]
    pub rounding_rule: RoundingRule,
    #[serde(default)]
    pub use_cross_vendor_fallback: bool,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PricingConfiguration {
    /// New configuration with every optional parameter unset.
    pub fn new(tenant_id: Uuid, strategy: PricingStrategy) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            strategy,
            markup_percentage: None,
            target_margin_percentage: None,
            premium_amount: None,
            discount_percentage: None,
            fallback_strategy: FallbackStrategy::None,
            fallback_markup_percentage: None,
            rounding_rule: RoundingRule::None,
            use_cross_vendor_fallback: false,
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn markup_or_default(&self) -> Decimal {
        self.markup_percentage.unwrap_or_else(default_percentage)
    }

    pub fn target_margin_or_default(&self) -> Decimal {
        self.target_margin_percentage.unwrap_or_else(default_percentage)
    }

    pub fn premium_or_default(&self) -> Decimal {
        self.premium_amount.unwrap_or(Decimal::ZERO)
    }

    pub fn discount_or_default(&self) -> Decimal {
        self.discount_percentage.unwrap_or(Decimal::ZERO)
    }

    pub fn fallback_markup_or_default(&self) -> Decimal {
        self.fallback_markup_percentage.unwrap_or_else(default_percentage)
    }

    /// Whether the primary or fallback strategy reads the MSRP field.
    /// Gates cross-vendor resolution of that field.
    pub fn references_msrp(&self) -> bool {
        matches!(
            self.strategy,
            PricingStrategy::Msrp | PricingStrategy::DiscountToMsrp
        ) || self.fallback_strategy == FallbackStrategy::Msrp
    }

    /// Whether the primary or fallback strategy reads the MAP field.
    pub fn references_map(&self) -> bool {
        matches!(
            self.strategy,
            PricingStrategy::Map | PricingStrategy::PremiumOverMap
        ) || self.fallback_strategy == FallbackStrategy::Map
    }
}
