use super::{
    components::{
        contact_section::ContactSection, features::FeaturesSection, footer::Footer,
        hero::HeroSection,
    },
    view_model::use_contact_view_model,
};
use crate::config;
use leptos::*;
use leptos_meta::{Meta, Title};

#[component]
pub fn HomePanel() -> impl IntoView {
    let vm = use_contact_view_model();
    let config = config::current();

    view! {
        <Title text="TimeTracker Pro - zarządzanie czasem pracy" />
        <Meta
            name="description"
            content="TimeTracker Pro to nowoczesne narzędzie do zarządzania czasem pracy dla małych i średnich firm."
        />
        <div class="min-h-screen">
            <HeroSection />
            <FeaturesSection />
            <ContactSection vm=vm config=config />
            <Footer />
        </div>
    }
}
