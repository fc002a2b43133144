//! Data models
//!
//! Reference data (malls, stores, products) is loaded from static JSON;
//! the rest is ecosystem state owned by the engine's store.
//! JSON field names are camelCase to match the persisted layout.

pub mod browsing;
pub mod cms;
pub mod feedback;
pub mod mall;
pub mod order;
pub mod product;
pub mod review;
pub mod rewards;
pub mod seller;
pub mod store;

// Re-exports
pub use browsing::*;
pub use cms::*;
pub use feedback::*;
pub use mall::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use rewards::*;
pub use seller::*;
pub use store::*;
