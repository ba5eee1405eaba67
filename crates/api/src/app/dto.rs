use serde::Deserialize;

use storefront_core::{DomainError, ProductId};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PublishProductsRequest {
    pub product_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListEntriesQuery {
    pub shop_id: String,
}

// -------------------------
// Mapping helpers
// -------------------------

/// Parse every raw id, failing on the first malformed one.
pub fn parse_product_ids(raw: &[String]) -> Result<Vec<ProductId>, DomainError> {
    raw.iter().map(|s| s.parse::<ProductId>()).collect()
}
