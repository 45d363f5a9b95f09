use crate::components::layout::LoadingSpinner;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-gradient-to-r from-blue-600 to-blue-700 text-white hover:from-blue-700 hover:to-blue-800 shadow-lg transform hover:scale-105 disabled:from-gray-400 disabled:to-gray-400 disabled:hover:scale-100",
            ButtonVariant::Outline => "border-2 border-gray-300 text-gray-700 hover:border-blue-600 hover:text-blue-600",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-full font-semibold transition-all disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-3">
                    <LoadingSpinner />
                </span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_variant_includes_gradient_class() {
        let classes = ButtonVariant::Primary.classes();
        assert!(classes.contains("from-blue-600"));
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn outline_variant_has_border() {
        assert!(ButtonVariant::Outline.classes().contains("border-2"));
    }
}
