use crate::pages::home::{
    components::contact_form::ContactForm, session::ContactSession,
    view_model::use_contact_view_model,
};
use leptos::*;
use std::{future::Future, time::Duration};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Drives `f` on a current-thread tokio runtime inside a `LocalSet`, which
/// dispatched actions need for `spawn_local`.
pub fn with_local_runtime_async<F, Fut>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let tokio_runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build test tokio runtime");
    tokio::task::LocalSet::new().block_on(&tokio_runtime, f());
}

pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders the contact form after `prepare` has driven its session into some state.
pub fn render_contact_form(prepare: impl FnOnce(&mut ContactSession) + 'static) -> String {
    render_to_string(move || {
        let vm = use_contact_view_model();
        vm.session.update(prepare);
        view! { <ContactForm vm=vm /> }
    })
}

/// Whether the first `<button>` in `html` carries the `disabled` attribute.
pub fn button_is_disabled(html: &str) -> bool {
    let Some(start) = html.find("<button") else {
        return false;
    };
    let tag = &html[start..];
    let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
    tag.split_whitespace()
        .any(|token| token == "disabled" || token.starts_with("disabled="))
}
