//! 订单 - demo pickup orders and returns
//!
//! ```text
//! create_demo_order ──▶ ready_for_pickup ──confirm_pickup──▶ picked_up
//!                              │
//!                 submit_return_request ──▶ requested ──update_return──▶ *
//! ```

use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use crate::ecosystem::money;
use shared::models::{Order, OrderStatus, ReturnInput, ReturnPatch, ReturnRequest, ReturnStatus};
use shared::util::{now_millis, pickup_code, prefixed_id};

impl EcosystemStore {
    /// Reserve one product for in-store pickup
    ///
    /// Resolves through overrides and custom products; `None` when unknown.
    pub fn create_demo_order(&mut self, product_id: &str) -> Option<Order> {
        let product = self.product_by_id(product_id)?;
        let now = now_millis();
        let order = Order {
            id: prefixed_id("ord"),
            user_id: self.user_id.clone(),
            store_id: product.store_id,
            product_ids: vec![product.id],
            total: money::order_total([product.price]),
            status: OrderStatus::ReadyForPickup,
            pickup_code: pickup_code(),
            created_at: now,
            updated_at: now,
            picked_up_at: None,
        };
        self.update(Namespace::Orders, |state, _| {
            state.orders.items.insert(0, order.clone());
        });
        tracing::debug!(order_id = %order.id, "Demo order created");
        Some(order)
    }

    /// Mark an order picked up; repeating it only refreshes the timestamps
    pub fn confirm_pickup(&mut self, order_id: &str) -> Option<Order> {
        self.try_update(Namespace::Orders, |state, _| {
            let order = state.orders.items.iter_mut().find(|o| o.id == order_id)?;
            let now = now_millis();
            order.status = OrderStatus::PickedUp;
            order.picked_up_at = Some(now);
            order.updated_at = now;
            Some(order.clone())
        })
    }

    /// Current user's orders, newest first
    pub fn orders(&self) -> Vec<&Order> {
        self.state
            .orders
            .items
            .iter()
            .filter(|o| o.user_id == self.user_id)
            .collect()
    }

    pub fn order_by_id(&self, order_id: &str) -> Option<&Order> {
        self.state.orders.items.iter().find(|o| o.id == order_id)
    }

    /// Open a return against an existing order
    pub fn submit_return_request(&mut self, input: ReturnInput) -> Option<ReturnRequest> {
        let order_id = input.order_id.trim();
        if order_id.is_empty() {
            return None;
        }
        let order = self.order_by_id(order_id)?;
        let now = now_millis();
        let request = ReturnRequest {
            id: prefixed_id("ret"),
            order_id: order.id.clone(),
            user_id: self.user_id.clone(),
            store_id: order.store_id.clone(),
            product_ids: order.product_ids.clone(),
            reason: input.reason.trim().to_string(),
            status: ReturnStatus::Requested,
            resolution: None,
            created_at: now,
            updated_at: now,
        };
        self.update(Namespace::Returns, |state, _| {
            state.returns.items.insert(0, request.clone());
        });
        Some(request)
    }

    pub fn update_return(&mut self, return_id: &str, patch: ReturnPatch) -> Option<ReturnRequest> {
        self.try_update(Namespace::Returns, |state, _| {
            let request = state.returns.items.iter_mut().find(|r| r.id == return_id)?;
            request.apply_patch(patch, now_millis());
            Some(request.clone())
        })
    }

    /// Current user's returns, newest first
    pub fn returns(&self) -> Vec<&ReturnRequest> {
        self.state
            .returns
            .items
            .iter()
            .filter(|r| r.user_id == self.user_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::ecosystem::store::test_support::*;
    use shared::models::{OrderStatus, ProductPatch, ReturnInput, ReturnPatch, ReturnStatus};
    use shared::util::PICKUP_CODE_LEN;

    #[test]
    fn test_unknown_product_creates_nothing() {
        let mut store = store();
        assert!(store.create_demo_order("nonexistent").is_none());
        assert!(store.state().orders.items.is_empty());
    }

    #[test]
    fn test_create_demo_order() {
        let mut store = store();
        let order = store.create_demo_order("p2").unwrap();
        assert_eq!(order.status, OrderStatus::ReadyForPickup);
        assert_eq!(order.store_id, "s1");
        assert_eq!(order.product_ids, vec!["p2"]);
        assert_eq!(order.total, 120_000.5);
        assert_eq!(order.pickup_code.len(), PICKUP_CODE_LEN);
        assert_eq!(store.orders().len(), 1);
    }

    #[test]
    fn test_order_uses_overridden_price() {
        let mut store = store();
        store.upsert_product_override(
            "p1",
            ProductPatch {
                price: Some(199_999.99),
                ..Default::default()
            },
        );
        assert_eq!(store.create_demo_order("p1").unwrap().total, 199_999.99);
    }

    #[test]
    fn test_confirm_pickup_is_idempotent_on_status() {
        let mut store = store();
        let order = store.create_demo_order("p1").unwrap();

        let picked = store.confirm_pickup(&order.id).unwrap();
        assert_eq!(picked.status, OrderStatus::PickedUp);
        assert!(picked.picked_up_at.is_some());

        let again = store.confirm_pickup(&order.id).unwrap();
        assert_eq!(again.status, OrderStatus::PickedUp);
        assert!(store.confirm_pickup("ord_missing").is_none());
    }

    #[test]
    fn test_return_requires_existing_order() {
        let mut store = store();
        assert!(store.submit_return_request(ReturnInput::default()).is_none());
        assert!(
            store
                .submit_return_request(ReturnInput {
                    order_id: "ord_missing".to_string(),
                    reason: "late".to_string(),
                })
                .is_none()
        );
        assert!(store.returns().is_empty());
    }

    #[test]
    fn test_return_lifecycle() {
        let mut store = store();
        let order = store.create_demo_order("p3").unwrap();
        let request = store
            .submit_return_request(ReturnInput {
                order_id: order.id.clone(),
                reason: "damaged cover".to_string(),
            })
            .unwrap();
        assert_eq!(request.status, ReturnStatus::Requested);
        assert_eq!(request.store_id, "s2");
        assert_eq!(request.product_ids, vec!["p3"]);

        let updated = store
            .update_return(
                &request.id,
                ReturnPatch {
                    status: Some(ReturnStatus::Approved),
                    resolution: Some("bring it back".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, ReturnStatus::Approved);
        assert_eq!(updated.reason, "damaged cover");
        assert_eq!(store.returns()[0].status, ReturnStatus::Approved);
        assert!(store.update_return("ret_missing", ReturnPatch::default()).is_none());
    }
}
