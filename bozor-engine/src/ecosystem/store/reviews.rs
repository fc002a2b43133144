use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use shared::models::{MAX_RATING, MIN_RATING, Review, ReviewInput};
use shared::util::{now_millis, prefixed_id};

impl EcosystemStore {
    /// Rate a known product; `None` for unknown products or out-of-range ratings
    pub fn submit_review(&mut self, input: ReviewInput) -> Option<Review> {
        if !(MIN_RATING..=MAX_RATING).contains(&input.rating) {
            return None;
        }
        let product = self.product_by_id(input.product_id.trim())?;
        let review = Review {
            id: prefixed_id("rev"),
            product_id: product.id,
            user_id: self.user_id.clone(),
            rating: input.rating,
            comment: input.comment.trim().to_string(),
            created_at: now_millis(),
        };
        self.update(Namespace::Reviews, |state, _| {
            state.reviews.items.insert(0, review.clone());
        });
        Some(review)
    }

    /// Newest first
    pub fn reviews_for_product(&self, product_id: &str) -> Vec<&Review> {
        self.state
            .reviews
            .items
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }

    pub fn average_rating(&self, product_id: &str) -> Option<f64> {
        let reviews = self.reviews_for_product(product_id);
        if reviews.is_empty() {
            return None;
        }
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / reviews.len() as f64)
    }
}
