//! Catalog - read-only reference data (malls, stores, products)
//!
//! Loaded once at startup from three JSON files and shared behind an `Arc`.
//! Foreign keys (`store.mall_id`, `product.store_id`) are assumed, never
//! enforced: dangling references simply resolve to `None`.

use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use shared::models::{Mall, Product, Store};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MALLS_FILE: &str = "malls.json";
pub const STORES_FILE: &str = "stores.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let path = match &err {
            CatalogError::Io { path, .. } | CatalogError::Parse { path, .. } => {
                path.display().to_string()
            }
        };
        AppError::with_message(ErrorCode::CatalogLoadFailed, err.to_string())
            .with_detail("path", path)
    }
}

/// Static catalog with id indexes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    malls: Vec<Mall>,
    stores: Vec<Store>,
    products: Vec<Product>,
    mall_index: HashMap<String, usize>,
    store_index: HashMap<String, usize>,
    product_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed collections
    pub fn new(malls: Vec<Mall>, stores: Vec<Store>, products: Vec<Product>) -> Self {
        let mall_index = index_by(&malls, |m| &m.id);
        let store_index = index_by(&stores, |s| &s.id);
        let product_index = index_by(&products, |p| &p.id);
        Self {
            malls,
            stores,
            products,
            mall_index,
            store_index,
            product_index,
        }
    }

    /// Load `malls.json`, `stores.json` and `products.json` from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let malls: Vec<Mall> = read_json(&dir.join(MALLS_FILE))?;
        let stores: Vec<Store> = read_json(&dir.join(STORES_FILE))?;
        let products: Vec<Product> = read_json(&dir.join(PRODUCTS_FILE))?;

        tracing::info!(
            malls = malls.len(),
            stores = stores.len(),
            products = products.len(),
            "📦 Catalog loaded from {}",
            dir.display()
        );

        Ok(Self::new(malls, stores, products))
    }

    pub fn malls(&self) -> &[Mall] {
        &self.malls
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Base products (without ecosystem overrides)
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn mall(&self, id: &str) -> Option<&Mall> {
        self.mall_index.get(id).map(|&i| &self.malls[i])
    }

    pub fn store(&self, id: &str) -> Option<&Store> {
        self.store_index.get(id).map(|&i| &self.stores[i])
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.product_index.get(id).map(|&i| &self.products[i])
    }

    /// Mall a store belongs to
    pub fn mall_of_store(&self, store: &Store) -> Option<&Mall> {
        self.mall(&store.mall_id)
    }

    pub fn stores_in_mall(&self, mall_id: &str) -> Vec<&Store> {
        self.stores.iter().filter(|s| s.mall_id == mall_id).collect()
    }

    pub fn products_in_store(&self, store_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.store_id == store_id)
            .collect()
    }
}

/// First occurrence wins for duplicated ids
fn index_by<T>(items: &[T], id: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.entry(id(item).clone()).or_insert(i);
    }
    index
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &Path) {
        fs::write(
            dir.join(MALLS_FILE),
            r#"[{"id":"m1","name":"Festival Mall","location":"Registan"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join(STORES_FILE),
            r#"[{"id":"s1","mallId":"m1","name":"Zara Store","category":"Fashion"},
                {"id":"s2","mallId":"m9","name":"Orphan Shop"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join(PRODUCTS_FILE),
            r#"[{"id":"p1","storeId":"s1","name":"Linen Shirt","price":250000}]"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.malls().len(), 1);
        assert_eq!(catalog.stores().len(), 2);
        assert_eq!(catalog.product("p1").unwrap().price, 250_000.0);
        assert_eq!(catalog.stores_in_mall("m1").len(), 1);
        assert_eq!(catalog.products_in_store("s1").len(), 1);
    }

    #[test]
    fn test_dangling_mall_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        let orphan = catalog.store("s2").unwrap();
        assert!(catalog.mall_of_store(orphan).is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::CatalogLoadFailed);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(dir.path().join(PRODUCTS_FILE), "{not json").unwrap();

        let err = Catalog::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
