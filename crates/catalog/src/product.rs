//! Product documents as authored in the product store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{ProductId, ShopId};

/// A product document.
///
/// Top-level products and child variants share one collection. `ancestors` is
/// empty for a top-level product; a child record lists its top-level product
/// first in the chain. Descriptive fields are authored upstream and copied
/// verbatim into catalog entries at publish time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub shop_id: ShopId,
    #[serde(default)]
    pub ancestors: Vec<ProductId>,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_top_level(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Id of the top-level product this document belongs to.
    ///
    /// A top-level product answers with its own id; a child record answers
    /// with the first ancestor in its chain.
    pub fn top_level_id(&self) -> ProductId {
        self.ancestors.first().copied().unwrap_or(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, ancestors: Vec<ProductId>) -> Product {
        let now = Utc::now();
        Product {
            id,
            shop_id: ShopId::new(),
            ancestors,
            title: "Tee".to_string(),
            handle: "tee".to_string(),
            description: None,
            vendor: None,
            is_visible: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn top_level_product_resolves_to_itself() {
        let id = ProductId::new();
        let p = product(id, Vec::new());
        assert!(p.is_top_level());
        assert_eq!(p.top_level_id(), id);
    }

    #[test]
    fn child_record_resolves_to_first_ancestor() {
        let parent = ProductId::new();
        let child = ProductId::new();
        let p = product(child, vec![parent]);
        assert!(!p.is_top_level());
        assert_eq!(p.top_level_id(), parent);
    }
}
