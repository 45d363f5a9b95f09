use super::{
    repository::ContactRepository,
    session::{ContactSession, SubmitRejection, SubmitStatus},
    utils::ContactField,
};
use crate::api::{ApiError, ContactMessageRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub session: RwSignal<ContactSession>,
    pub submit_action: Action<ContactMessageRequest, Result<(), ApiError>>,
}

impl ContactViewModel {
    pub fn set_field(&self, field: ContactField, value: String) {
        self.session.update(|s| s.set_field(field, value));
    }

    pub fn submit(&self) -> Result<(), SubmitRejection> {
        match self.session.try_update(ContactSession::begin_submit) {
            Some(Ok(request)) => {
                log::info!(
                    "dispatching contact submission from @{}",
                    request.email_domain()
                );
                self.submit_action.dispatch(request);
                Ok(())
            }
            Some(Err(rejection)) => {
                log::debug!("contact submission rejected: {}", rejection);
                Err(rejection)
            }
            None => Ok(()),
        }
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(ContactSession::is_submitting))
    }

    pub fn status(&self) -> Signal<SubmitStatus> {
        let session = self.session;
        Signal::derive(move || session.with(ContactSession::status))
    }

    pub fn field_value(&self, field: ContactField) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.data().get(field).to_string()))
    }

    pub fn field_error(&self, field: ContactField) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.errors().get(field).map(str::to_string)))
    }
}

pub fn apply_submit_result(
    result: Option<Result<(), ApiError>>,
    session: RwSignal<ContactSession>,
) {
    if let Some(result) = result {
        session.update(|s| {
            if s.settle(result) {
                log::info!("contact submission settled: {:?}", s.status());
            }
        });
    }
}

pub fn use_contact_view_model() -> ContactViewModel {
    let repository = use_context::<ContactRepository>().unwrap_or_default();

    let session = create_rw_signal(ContactSession::default());

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |request: &ContactMessageRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move { repo.submit(request).await }
    });

    create_effect(move |_| {
        apply_submit_result(submit_action.value().get(), session);
    });

    ContactViewModel {
        session,
        submit_action,
    }
}
