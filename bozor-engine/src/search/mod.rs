//! Marketplace search
//!
//! Token-AND substring ranking over malls, stores and products.
//!
//! # Scoring
//!
//! Every query token must occur in the candidate's haystack, otherwise the
//! candidate scores 0 and is dropped. A token found at character index `idx`
//! contributes:
//!
//! | position | base | bonus |
//! |----------|------|-------|
//! | `idx == 0` | 8 | `10 - idx` |
//! | `idx < 10` | 5 | `10 - idx` |
//! | otherwise | 3 | 0 |
//!
//! Results are ordered by score descending, then id ascending, so equal
//! scores always come back in the same order.

mod normalize;

pub use normalize::{normalize, tokenize};

use serde::{Deserialize, Serialize};
use shared::models::{Mall, Product, Store};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Default cap on the merged result list
pub const DEFAULT_LIMIT: usize = 20;

/// Which collections a search covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    All,
    Malls,
    Stores,
    Products,
}

impl SearchScope {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "malls" => Some(Self::Malls),
            "stores" => Some(Self::Stores),
            "products" => Some(Self::Products),
            _ => None,
        }
    }

    fn covers(&self, other: SearchScope) -> bool {
        *self == SearchScope::All || *self == other
    }
}

/// Search input; collections are borrowed, nothing is copied
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub scope: SearchScope,
    pub malls: &'a [Mall],
    pub stores: &'a [Store],
    pub products: &'a [Product],
    /// Cap on `flat`; per-type lists are not truncated
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedMall<'a> {
    pub score: u32,
    pub mall: &'a Mall,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedStore<'a> {
    pub score: u32,
    pub store: &'a Store,
    pub mall: Option<&'a Mall>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedProduct<'a> {
    pub score: u32,
    pub product: &'a Product,
    pub store: Option<&'a Store>,
    pub mall: Option<&'a Mall>,
}

/// Entry of the merged cross-type list
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlatHit<'a> {
    Mall(RankedMall<'a>),
    Store(RankedStore<'a>),
    Product(RankedProduct<'a>),
}

impl<'a> FlatHit<'a> {
    pub fn score(&self) -> u32 {
        match self {
            Self::Mall(m) => m.score,
            Self::Store(s) => s.score,
            Self::Product(p) => p.score,
        }
    }

    pub fn id(&self) -> &'a str {
        match self {
            Self::Mall(m) => &m.mall.id,
            Self::Store(s) => &s.store.id,
            Self::Product(p) => &p.product.id,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Mall(_) => 0,
            Self::Store(_) => 1,
            Self::Product(_) => 2,
        }
    }
}

/// Search output
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults<'a> {
    pub malls: Vec<RankedMall<'a>>,
    pub stores: Vec<RankedStore<'a>>,
    pub products: Vec<RankedProduct<'a>>,
    pub flat: Vec<FlatHit<'a>>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.malls.is_empty()
            && self.stores.is_empty()
            && self.products.is_empty()
            && self.flat.is_empty()
    }
}

/// Score a normalized haystack against normalized tokens (0 = no match)
pub fn score_haystack(haystack: &str, tokens: &[String]) -> u32 {
    let mut total = 0u32;
    for token in tokens {
        let Some(byte_idx) = haystack.find(token.as_str()) else {
            return 0;
        };
        let idx = haystack[..byte_idx].chars().count();
        let base = if idx == 0 {
            8
        } else if idx < 10 {
            5
        } else {
            3
        };
        total += base + 10u32.saturating_sub(idx as u32);
    }
    total
}

fn haystack(parts: &[&str]) -> String {
    normalize(&parts.join(" "))
}

fn by_score_then_id(a: (u32, &str), b: (u32, &str)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1))
}

/// Rank malls, stores and products for a free-text query
///
/// A query with no tokens returns empty results.
pub fn search_marketplace<'a>(request: &SearchRequest<'a>) -> SearchResults<'a> {
    let tokens = tokenize(request.query);
    if tokens.is_empty() {
        return SearchResults::default();
    }

    let malls_by_id: HashMap<&str, &'a Mall> = request
        .malls
        .iter()
        .map(|m| (m.id.as_str(), m))
        .collect();
    let stores_by_id: HashMap<&str, &'a Store> = request
        .stores
        .iter()
        .map(|s| (s.id.as_str(), s))
        .collect();

    let mut results = SearchResults::default();

    if request.scope.covers(SearchScope::Malls) {
        results.malls = request
            .malls
            .iter()
            .filter_map(|mall| {
                let text = haystack(&[
                    mall.name.as_str(),
                    mall.location.as_str(),
                    mall.description.as_str(),
                ]);
                let score = score_haystack(&text, &tokens);
                (score > 0).then_some(RankedMall { score, mall })
            })
            .collect();
        results.malls.sort_by(|a, b| {
            by_score_then_id((a.score, a.mall.id.as_str()), (b.score, b.mall.id.as_str()))
        });
    }

    if request.scope.covers(SearchScope::Stores) {
        results.stores = request
            .stores
            .iter()
            .filter_map(|store| {
                let mall = malls_by_id.get(store.mall_id.as_str()).copied();
                let text = haystack(&[
                    store.name.as_str(),
                    store.category.as_str(),
                    store.description.as_str(),
                    store.about.as_str(),
                    mall.map(|m| m.name.as_str()).unwrap_or_default(),
                ]);
                let score = score_haystack(&text, &tokens);
                (score > 0).then_some(RankedStore { score, store, mall })
            })
            .collect();
        results.stores.sort_by(|a, b| {
            by_score_then_id((a.score, a.store.id.as_str()), (b.score, b.store.id.as_str()))
        });
    }

    if request.scope.covers(SearchScope::Products) {
        results.products = request
            .products
            .iter()
            .filter_map(|product| {
                let store = stores_by_id.get(product.store_id.as_str()).copied();
                let mall = store.and_then(|s| malls_by_id.get(s.mall_id.as_str()).copied());
                let text = haystack(&[
                    product.name.as_str(),
                    product.category.as_str(),
                    product.tag.as_deref().unwrap_or_default(),
                    product.brand.as_deref().unwrap_or_default(),
                    product.description.as_deref().unwrap_or_default(),
                    store.map(|s| s.name.as_str()).unwrap_or_default(),
                    mall.map(|m| m.name.as_str()).unwrap_or_default(),
                ]);
                let score = score_haystack(&text, &tokens);
                (score > 0).then_some(RankedProduct {
                    score,
                    product,
                    store,
                    mall,
                })
            })
            .collect();
        results.products.sort_by(|a, b| {
            by_score_then_id((a.score, a.product.id.as_str()), (b.score, b.product.id.as_str()))
        });
    }

    let mut flat: Vec<FlatHit<'a>> = results
        .malls
        .iter()
        .copied()
        .map(FlatHit::Mall)
        .chain(results.stores.iter().copied().map(FlatHit::Store))
        .chain(results.products.iter().copied().map(FlatHit::Product))
        .collect();
    flat.sort_by(|a, b| {
        by_score_then_id((a.score(), a.id()), (b.score(), b.id()))
            .then_with(|| a.kind_rank().cmp(&b.kind_rank()))
    });
    flat.truncate(request.limit);
    results.flat = flat;

    tracing::debug!(
        query = request.query,
        malls = results.malls.len(),
        stores = results.stores.len(),
        products = results.products.len(),
        "search completed"
    );

    results
}
