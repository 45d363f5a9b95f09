use crate::api::{ApiError, ContactIntake, ContactMessageRequest, StandInClient};
use std::rc::Rc;

#[derive(Clone)]
pub struct ContactRepository {
    client: Rc<dyn ContactIntake>,
}

impl ContactRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(StandInClient::new()))
    }

    pub fn new_with_client(client: Rc<dyn ContactIntake>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, request: ContactMessageRequest) -> Result<(), ApiError> {
        self.client.submit_contact(request).await
    }
}

impl Default for ContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::pages::home::session::{ContactSession, SubmitStatus};
    use crate::pages::home::utils::ContactField;
    use crate::test_support::helpers::{fill_valid, FailingIntake};
    use std::time::Duration;

    fn repository() -> ContactRepository {
        ContactRepository::new_with_client(Rc::new(StandInClient::with_delay(Duration::ZERO)))
    }

    #[tokio::test]
    async fn valid_submission_round_trip_settles_success() {
        let repo = repository();
        let mut session = ContactSession::default();
        fill_valid(&mut session);

        let payload = session.begin_submit().unwrap();
        assert!(session.is_submitting());
        let result = repo.submit(payload).await;
        assert!(session.settle(result));

        assert!(!session.is_submitting());
        assert_eq!(session.status(), SubmitStatus::Success);
        assert!(session.data().is_empty());
    }

    #[tokio::test]
    async fn failing_intake_settles_error_and_keeps_fields() {
        let repo = ContactRepository::new_with_client(Rc::new(FailingIntake));
        let mut session = ContactSession::default();
        fill_valid(&mut session);

        let payload = session.begin_submit().unwrap();
        let result = repo.submit(payload).await;
        assert_eq!(result.as_ref().unwrap_err().code, "REQUEST_FAILED");
        session.settle(result);

        assert_eq!(session.status(), SubmitStatus::Error);
        assert_eq!(session.data().get(ContactField::Name), "Jan Kowalski");
    }
}
