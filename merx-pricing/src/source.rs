use async_trait::async_trait;
use merx_shared::PriceQuote;
use std::collections::HashMap;
use uuid::Uuid;

/// Supplies per-vendor quotes for a product.
///
/// Implemented by live vendor API adapters and by caches of prior vendor
/// responses; callers gather quotes through this seam and hand them to
/// the pricing engine. The engine itself never fetches.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// All quotes the tenant's configured vendors currently offer for the
    /// given SKU. An empty list means no vendor quotes the product.
    async fn fetch_quotes(
        &self,
        tenant_id: Uuid,
        sku: &str,
    ) -> Result<Vec<PriceQuote>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory quote source over previously fetched vendor responses.
pub struct CachedQuoteSource {
    quotes: HashMap<(Uuid, String), Vec<PriceQuote>>,
}

impl CachedQuoteSource {
    pub fn new() -> Self {
        Self {
            quotes: HashMap::new(),
        }
    }

    /// Store the quotes most recently fetched for a tenant's SKU.
    pub fn insert(&mut self, tenant_id: Uuid, sku: &str, quotes: Vec<PriceQuote>) {
        self.quotes.insert((tenant_id, sku.to_string()), quotes);
    }
}

impl Default for CachedQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for CachedQuoteSource {
    async fn fetch_quotes(
        &self,
        tenant_id: Uuid,
        sku: &str,
    ) -> Result<Vec<PriceQuote>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .quotes
            .get(&(tenant_id, sku.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
