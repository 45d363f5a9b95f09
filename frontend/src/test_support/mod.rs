#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiError, ContactIntake, ContactMessageRequest};
    use crate::pages::home::{session::ContactSession, utils::ContactField};
    use async_trait::async_trait;

    pub fn fill_valid(session: &mut ContactSession) {
        session.set_field(ContactField::Name, "Jan Kowalski".into());
        session.set_field(ContactField::Email, "jan@firma.pl".into());
        session.set_field(ContactField::Message, "Hello".into());
    }

    /// Intake double that always reports the service as unreachable.
    pub struct FailingIntake;

    #[async_trait(?Send)]
    impl ContactIntake for FailingIntake {
        async fn submit_contact(&self, _request: ContactMessageRequest) -> Result<(), ApiError> {
            Err(ApiError::request_failed("contact intake unavailable"))
        }
    }
}
