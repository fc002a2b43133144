//! Effective product catalog: overrides, custom products, lookups

use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use shared::models::{Mall, Product, ProductOverride, ProductPatch, Store};
use shared::util::{now_millis, prefixed_id};

impl EcosystemStore {
    /// Merge `patch` into the product's override (later fields win)
    pub fn upsert_product_override(
        &mut self,
        product_id: &str,
        patch: ProductPatch,
    ) -> Option<ProductOverride> {
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return None;
        }
        let updated = self.update(Namespace::Catalog, |state, _| {
            let overrides = &mut state.catalog.product_overrides_by_id;
            let mut merged = overrides
                .remove(product_id)
                .map(|existing| existing.patch)
                .unwrap_or_default();
            merged.merge(patch);
            let updated = ProductOverride {
                patch: merged,
                updated_at: now_millis(),
            };
            overrides.insert(product_id.to_string(), updated.clone());
            updated
        });
        Some(updated)
    }

    /// Add a seller-created product ahead of the base catalog
    ///
    /// A blank id gets a generated one; an existing custom product with the
    /// same id is replaced.
    pub fn create_custom_product(&mut self, mut product: Product) -> Product {
        if product.id.trim().is_empty() {
            product.id = prefixed_id("custom");
        }
        self.update(Namespace::Catalog, |state, _| {
            let custom = &mut state.catalog.custom_products;
            custom.retain(|p| p.id != product.id);
            custom.insert(0, product.clone());
            product
        })
    }

    pub fn delete_custom_product(&mut self, product_id: &str) -> bool {
        if !self
            .state
            .catalog
            .custom_products
            .iter()
            .any(|p| p.id == product_id)
        {
            return false;
        }
        self.update(Namespace::Catalog, |state, _| {
            state.catalog.custom_products.retain(|p| p.id != product_id);
            true
        })
    }

    /// Custom products, then base products with overrides applied
    pub fn all_products(&self) -> Vec<Product> {
        let catalog_state = &self.state.catalog;
        let base = self.catalog.products().iter().map(|base| {
            let mut product = base.clone();
            if let Some(ov) = catalog_state.product_overrides_by_id.get(&base.id) {
                product.apply_patch(&ov.patch);
            }
            product
        });
        catalog_state
            .custom_products
            .iter()
            .cloned()
            .chain(base)
            .collect()
    }

    pub fn product_by_id(&self, product_id: &str) -> Option<Product> {
        self.all_products().into_iter().find(|p| p.id == product_id)
    }

    pub fn products_by_store(&self, store_id: &str) -> Vec<Product> {
        self.all_products()
            .into_iter()
            .filter(|p| p.store_id == store_id)
            .collect()
    }

    pub fn store_by_id(&self, store_id: &str) -> Option<&Store> {
        self.catalog.store(store_id)
    }

    pub fn mall_by_id(&self, mall_id: &str) -> Option<&Mall> {
        self.catalog.mall(mall_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::ecosystem::store::test_support::*;
    use shared::models::{Product, ProductPatch};
    use std::collections::BTreeMap;

    fn custom(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            store_id: "s2".to_string(),
            name: name.to_string(),
            category: "Books".to_string(),
            price: 10_000.0,
            tag: None,
            brand: None,
            description: None,
            rating: None,
            images: vec![],
            specifications: BTreeMap::new(),
        }
    }

    #[test]
    fn test_override_applies_on_read_only() {
        let mut store = store();
        store
            .upsert_product_override(
                "p1",
                ProductPatch {
                    price: Some(199_000.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.product_by_id("p1").unwrap().price, 199_000.0);
        assert_eq!(store.catalog().product("p1").unwrap().price, 250_000.0);
    }

    #[test]
    fn test_override_merges_shallowly() {
        let mut store = store();
        store.upsert_product_override(
            "p1",
            ProductPatch {
                name: Some("Linen Shirt II".to_string()),
                ..Default::default()
            },
        );
        let ov = store
            .upsert_product_override(
                "p1",
                ProductPatch {
                    tag: Some("sale".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(ov.patch.name.as_deref(), Some("Linen Shirt II"));
        assert_eq!(ov.patch.tag.as_deref(), Some("sale"));
        assert!(store.upsert_product_override(" ", ProductPatch::default()).is_none());
    }

    #[test]
    fn test_custom_products_come_first() {
        let mut store = store();
        let created = store.create_custom_product(custom("", "Zine"));
        assert!(created.id.starts_with("custom_"));

        let all = store.all_products();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, created.id);
        assert_eq!(store.products_by_store("s2").len(), 2);
    }

    #[test]
    fn test_custom_product_same_id_replaces() {
        let mut store = store();
        store.create_custom_product(custom("c1", "First"));
        store.create_custom_product(custom("c1", "Second"));

        assert_eq!(store.state().catalog.custom_products.len(), 1);
        assert_eq!(store.product_by_id("c1").unwrap().name, "Second");
    }

    #[test]
    fn test_delete_custom_product() {
        let mut store = store();
        store.create_custom_product(custom("c1", "Zine"));
        assert!(store.delete_custom_product("c1"));
        assert!(!store.delete_custom_product("c1"));
        assert!(store.product_by_id("c1").is_none());
    }

    #[test]
    fn test_reference_lookups() {
        let store = store();
        assert_eq!(store.store_by_id("s1").unwrap().name, "Zara Store");
        assert_eq!(store.mall_by_id("m1").unwrap().name, "Festival Mall");
        assert!(store.mall_by_id("m404").is_none());
    }
}
