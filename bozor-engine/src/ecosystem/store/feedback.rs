use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use shared::models::{FeedbackInput, FeedbackItem, FeedbackStatus};
use shared::util::{now_millis, prefixed_id};

impl EcosystemStore {
    /// Record feedback; `None` when the message is blank
    pub fn submit_feedback(&mut self, input: FeedbackInput) -> Option<FeedbackItem> {
        let message = input.message.trim();
        if message.is_empty() {
            return None;
        }
        let now = now_millis();
        let item = FeedbackItem {
            id: prefixed_id("fb"),
            kind: input.kind.trim().to_string(),
            message: message.to_string(),
            email: input.email.trim().to_string(),
            user_id: self.user_id.clone(),
            status: FeedbackStatus::Open,
            created_at: now,
            updated_at: now,
        };
        self.update(Namespace::Feedback, |state, _| {
            state.feedback.items.insert(0, item.clone());
        });
        Some(item)
    }

    pub fn update_feedback_status(
        &mut self,
        feedback_id: &str,
        status: FeedbackStatus,
    ) -> Option<FeedbackItem> {
        self.try_update(Namespace::Feedback, |state, _| {
            let item = state
                .feedback
                .items
                .iter_mut()
                .find(|f| f.id == feedback_id)?;
            item.status = status;
            item.updated_at = now_millis();
            Some(item.clone())
        })
    }

    /// All feedback, newest first
    pub fn feedback(&self) -> &[FeedbackItem] {
        &self.state.feedback.items
    }
}

#[cfg(test)]
mod tests {
    use crate::ecosystem::store::test_support::*;
    use shared::models::{FeedbackInput, FeedbackStatus};

    fn input(message: &str) -> FeedbackInput {
        FeedbackInput {
            kind: "bug".to_string(),
            message: message.to_string(),
            email: "a@b.uz".to_string(),
        }
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut store = store();
        assert!(store.submit_feedback(input("   ")).is_none());
        assert!(store.feedback().is_empty());
    }

    #[test]
    fn test_submit_and_update_status() {
        let mut store = store();
        let item = store.submit_feedback(input(" map is wrong ")).unwrap();
        assert_eq!(item.message, "map is wrong");
        assert_eq!(item.status, FeedbackStatus::Open);
        assert_eq!(item.user_id, "guest");

        let updated = store
            .update_feedback_status(&item.id, FeedbackStatus::Resolved)
            .unwrap();
        assert_eq!(updated.status, FeedbackStatus::Resolved);
        assert_eq!(store.feedback()[0].status, FeedbackStatus::Resolved);

        assert!(
            store
                .update_feedback_status("fb_missing", FeedbackStatus::Closed)
                .is_none()
        );
    }
}
