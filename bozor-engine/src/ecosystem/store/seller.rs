//! Seller access requests and approvals

use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use crate::ecosystem::state::EcosystemState;
use shared::models::{SellerRequest, SellerStatus};
use shared::util::{now_millis, prefixed_id};

impl EcosystemStore {
    /// Ask to manage `store_id`
    ///
    /// Blank store ids are ignored. A pending request from the same user for
    /// the same store is returned as is.
    pub fn request_seller_access(&mut self, store_id: &str) -> Option<SellerRequest> {
        let store_id = store_id.trim();
        if store_id.is_empty() {
            return None;
        }
        if let Some(pending) = self.state.seller.requests.iter().find(|r| {
            r.user_id == self.user_id && r.store_id == store_id && r.status == SellerStatus::Pending
        }) {
            return Some(pending.clone());
        }

        let now = now_millis();
        let request = SellerRequest {
            id: prefixed_id("sreq"),
            user_id: self.user_id.clone(),
            store_id: store_id.to_string(),
            status: SellerStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.update(Namespace::Seller, |state, _| {
            state.seller.requests.insert(0, request.clone());
        });
        Some(request)
    }

    /// Approve a request and grant the requester its store
    pub fn approve_seller(&mut self, request_id: &str) -> Option<SellerRequest> {
        self.try_update(Namespace::Seller, |state, _| {
            let request = set_status(state, request_id, SellerStatus::Approved)?;
            let approval = state
                .seller
                .approvals_by_user_id
                .entry(request.user_id.clone())
                .or_default();
            if !approval.store_ids.contains(&request.store_id) {
                approval.store_ids.push(request.store_id.clone());
            }
            approval.approved_at = request.updated_at;
            Some(request)
        })
    }

    /// Reject a request; existing approvals are kept
    pub fn reject_seller(&mut self, request_id: &str) -> Option<SellerRequest> {
        self.try_update(Namespace::Seller, |state, _| {
            set_status(state, request_id, SellerStatus::Rejected)
        })
    }

    pub fn is_seller_approved_for_store(&self, store_id: &str) -> bool {
        self.state
            .seller
            .approvals_by_user_id
            .get(&self.user_id)
            .is_some_and(|a| a.store_ids.iter().any(|id| id == store_id))
    }

    /// All requests, newest first
    pub fn seller_requests(&self) -> &[SellerRequest] {
        &self.state.seller.requests
    }
}

fn set_status(
    state: &mut EcosystemState,
    request_id: &str,
    status: SellerStatus,
) -> Option<SellerRequest> {
    let request = state
        .seller
        .requests
        .iter_mut()
        .find(|r| r.id == request_id)?;
    request.status = status;
    request.updated_at = now_millis();
    Some(request.clone())
}
