use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{self, RawMoney};

/// How a vendor integration sources its numbers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingKind {
    /// Wholesale distributor: cost is an acquisition cost basis.
    #[default]
    Wholesale,
    /// Marketplace/auction listing: "cost" is the live asking price.
    Marketplace,
}

/// One vendor's offer for a product.
///
/// Monetary fields are kept raw as delivered by the vendor adapter; the
/// accessors normalize on read. Absent is a distinct state from zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceQuote {
    pub vendor_id: Uuid,
    #[serde(default)]
    pub listing_kind: ListingKind,
    #[serde(default)]
    pub cost: Option<RawMoney>,
    #[serde(default)]
    pub msrp: Option<RawMoney>,
    #[serde(default)]
    pub map: Option<RawMoney>,
}

impl PriceQuote {
    /// Empty wholesale quote for a vendor.
    pub fn new(vendor_id: Uuid) -> Self {
        Self {
            vendor_id,
            listing_kind: ListingKind::Wholesale,
            cost: None,
            msrp: None,
            map: None,
        }
    }

    /// Acquisition cost, normalized. Zero is a valid cost.
    pub fn parsed_cost(&self) -> Option<Decimal> {
        money::parse_cost(self.cost.as_ref())
    }

    /// Manufacturer suggested retail price, normalized.
    pub fn parsed_msrp(&self) -> Option<Decimal> {
        money::parse_suggested_price(self.msrp.as_ref())
    }

    /// Minimum advertised price, normalized.
    pub fn parsed_map(&self) -> Option<Decimal> {
        money::parse_suggested_price(self.map.as_ref())
    }

    pub fn is_marketplace(&self) -> bool {
        self.listing_kind == ListingKind::Marketplace
    }
}
