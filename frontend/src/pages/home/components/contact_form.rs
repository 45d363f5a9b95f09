use crate::components::{
    common::Button,
    layout::{ErrorMessage, FieldError, SuccessMessage},
};
use crate::pages::home::{session::SubmitStatus, utils::ContactField, view_model::ContactViewModel};
use leptos::{ev::SubmitEvent, *};

pub const SUCCESS_BANNER: &str =
    "Dziękujemy! Wiadomość została wysłana. Skontaktujemy się z Tobą wkrótce.";
pub const ERROR_BANNER: &str = "Wystąpił błąd podczas wysyłania wiadomości. Spróbuj ponownie.";

const INPUT_BASE: &str = "w-full px-4 py-3 border-2 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition-colors";

fn control_class(has_error: bool) -> String {
    format!(
        "{} {}",
        INPUT_BASE,
        if has_error {
            "border-red-300"
        } else {
            "border-gray-200"
        }
    )
}

#[component]
fn TextField(
    vm: ContactViewModel,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = vm.field_value(field);
    let error = vm.field_error(field);
    let label = if field.is_required() {
        format!("{} *", label)
    } else {
        label.to_string()
    };

    view! {
        <div>
            <label for=field.key() class="block text-sm font-semibold text-gray-700 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=field.key()
                name=field.key()
                class=move || control_class(error.with(Option::is_some))
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn ContactForm(vm: ContactViewModel) -> impl IntoView {
    let status = vm.status();
    let submitting = vm.is_submitting();
    let message = vm.field_value(ContactField::Message);
    let message_error = vm.field_error(ContactField::Message);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = vm.submit();
    };

    view! {
        <div class="bg-white rounded-3xl p-8 shadow-2xl">
            <h3 class="text-2xl font-bold text-gray-900 mb-6">"Skontaktuj się z nami"</h3>

            <Show when=move || status.get() == SubmitStatus::Success fallback=|| ()>
                <SuccessMessage message=SUCCESS_BANNER.to_string() />
            </Show>
            <Show when=move || status.get() == SubmitStatus::Error fallback=|| ()>
                <ErrorMessage message=ERROR_BANNER.to_string() />
            </Show>

            <form class="space-y-6" novalidate=true on:submit=on_submit>
                <TextField
                    vm=vm
                    field=ContactField::Name
                    label="Imię i nazwisko"
                    placeholder="Jan Kowalski"
                />
                <TextField
                    vm=vm
                    field=ContactField::Email
                    label="Adres email"
                    placeholder="jan.kowalski@firma.pl"
                    input_type="email"
                />
                <TextField
                    vm=vm
                    field=ContactField::Company
                    label="Nazwa firmy"
                    placeholder="Twoja Firma Sp. z o.o."
                />
                <TextField
                    vm=vm
                    field=ContactField::Phone
                    label="Telefon"
                    placeholder="+48 600 000 000"
                    input_type="tel"
                />
                <div>
                    <label for=ContactField::Message.key() class="block text-sm font-semibold text-gray-700 mb-2">
                        "Wiadomość *"
                    </label>
                    <textarea
                        id=ContactField::Message.key()
                        name=ContactField::Message.key()
                        rows=4
                        class=move || format!("{} resize-none", control_class(message_error.with(Option::is_some)))
                        placeholder="Opisz swoje potrzeby związane z zarządzaniem czasem pracy w firmie..."
                        prop:value=move || message.get()
                        on:input=move |ev| vm.set_field(ContactField::Message, event_target_value(&ev))
                    ></textarea>
                    <FieldError error=message_error />
                </div>

                <Button class="w-full py-4 px-6 rounded-xl" loading=submitting>
                    {move || if submitting.get() { "Wysyłanie..." } else { "Wyślij wiadomość" }}
                </Button>
            </form>
        </div>
    }
}
