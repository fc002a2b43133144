//! 积分 - loyalty points and tiers

use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use crate::ecosystem::state::EcosystemState;
use shared::models::{RewardEntry, Tier};
use shared::util::now_millis;

impl EcosystemStore {
    /// Add points for the current user and return the new total
    ///
    /// Non-positive amounts change nothing. Repeated calls for the same
    /// action award again; use [`Self::award_points_once`] to dedupe.
    pub fn award_points(&mut self, amount: i64, reason: &str) -> u64 {
        if amount <= 0 {
            return self.points();
        }
        self.update(Namespace::Rewards, |state, user_id| {
            credit(state, user_id, amount.unsigned_abs(), reason)
        })
    }

    /// Award at most once per `key` for the current user
    ///
    /// Returns `false` when the key was already redeemed, the key is blank
    /// or the amount is not positive.
    pub fn award_points_once(&mut self, key: &str, amount: i64, reason: &str) -> bool {
        let key = key.trim();
        if key.is_empty() || amount <= 0 {
            return false;
        }
        self.try_update(Namespace::Rewards, |state, user_id| {
            let keys = state
                .rewards
                .awarded_keys_by_user_id
                .entry(user_id.to_string())
                .or_default();
            if keys.iter().any(|k| k == key) {
                return None;
            }
            keys.push(key.to_string());
            credit(state, user_id, amount.unsigned_abs(), reason);
            Some(())
        })
        .is_some()
    }

    pub fn points(&self) -> u64 {
        self.state
            .rewards
            .points_by_user_id
            .get(&self.user_id)
            .copied()
            .unwrap_or(0)
    }

    pub fn tier(&self) -> Tier {
        Tier::from_points(self.points())
    }

    /// Most recent award for the current user (only the latest is kept)
    pub fn last_reward(&self) -> Option<&RewardEntry> {
        self.state.rewards.last_reward_by_user_id.get(&self.user_id)
    }
}

fn credit(state: &mut EcosystemState, user_id: &str, amount: u64, reason: &str) -> u64 {
    let rewards = &mut state.rewards;
    let total = rewards
        .points_by_user_id
        .entry(user_id.to_string())
        .or_insert(0);
    *total = total.saturating_add(amount);
    rewards.last_reward_by_user_id.insert(
        user_id.to_string(),
        RewardEntry {
            amount,
            reason: reason.to_string(),
            at: now_millis(),
        },
    );
    *total
}

#[cfg(test)]
mod tests {
    use crate::ecosystem::store::test_support::*;
    use crate::storage::MemoryStorage;
    use shared::models::Tier;
    use std::sync::Arc;

    #[test]
    fn test_negative_award_is_ignored() {
        let mut store = store();
        assert_eq!(store.award_points(-5, "x"), 0);
        assert_eq!(store.award_points(0, "x"), 0);
        assert_eq!(store.points(), 0);
        assert!(store.last_reward().is_none());
    }

    #[test]
    fn test_award_accumulates_and_records_last() {
        let mut store = store();
        store.award_points(400, "review");
        assert_eq!(store.award_points(600, "order"), 1000);

        let last = store.last_reward().unwrap();
        assert_eq!(last.amount, 600);
        assert_eq!(last.reason, "order");
        assert_eq!(store.tier(), Tier::Gold);
    }

    #[test]
    fn test_tier_boundaries() {
        let mut store = store();
        store.award_points(999, "a");
        assert_eq!(store.tier(), Tier::Silver);
        store.award_points(1, "b");
        assert_eq!(store.tier(), Tier::Gold);
        store.award_points(1500, "c");
        assert_eq!(store.points(), 2500);
        assert_eq!(store.tier(), Tier::Platinum);
    }

    #[test]
    fn test_points_are_per_user() {
        let storage = Arc::new(MemoryStorage::new());
        let mut alice = store_with(storage.clone(), "alice");
        alice.award_points(50, "signup");

        let bob = store_with(storage, "bob");
        assert_eq!(bob.points(), 0);
    }

    #[test]
    fn test_award_once_dedupes_by_key() {
        let mut store = store();
        assert!(store.award_points_once("view:p1", 10, "viewed product"));
        assert!(!store.award_points_once("view:p1", 10, "viewed product"));
        assert!(store.award_points_once("view:p2", 10, "viewed product"));
        assert_eq!(store.points(), 20);

        assert!(!store.award_points_once("", 10, "blank"));
        assert!(!store.award_points_once("neg", -1, "negative"));
        assert_eq!(store.points(), 20);
    }
}
