use super::contact_form::ContactForm;
use crate::config::AppConfig;
use crate::pages::home::view_model::ContactViewModel;
use crate::utils::dom::SectionId;
use leptos::*;

const STATS: [(&str, &str); 3] = [
    ("5000+", "Zadowolonych firm"),
    ("35%", "Wzrost produktywności"),
    ("97%", "Ocena zadowolenia"),
];

#[component]
pub fn ContactChannels(config: AppConfig) -> impl IntoView {
    view! {
        <div class="mt-8 pt-8 border-t border-gray-200 text-center text-gray-600">
            <p>"Lub skontaktuj się bezpośrednio:"</p>
            <div class="flex flex-col sm:flex-row justify-center items-center gap-2 sm:gap-4 mt-2">
                <a href=config.mailto_href() class="text-blue-600 hover:text-blue-700 font-medium">
                    {config.contact_email.clone()}
                </a>
                <span class="hidden sm:inline text-gray-400">"•"</span>
                <a href=config.tel_href() class="text-blue-600 hover:text-blue-700 font-medium">
                    {config.contact_phone.clone()}
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection(vm: ContactViewModel, config: AppConfig) -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() class="relative py-24 bg-gradient-to-br from-blue-600 via-blue-700 to-blue-800 overflow-hidden">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="text-white">
                        <h2 class="text-3xl md:text-4xl font-bold mb-6">
                            "Gotowy na zwiększenie produktywności?"
                        </h2>
                        <p class="text-xl text-blue-100 mb-8 leading-relaxed">
                            "Skontaktuj się z nami już dziś i dowiedz się, jak TimeTracker Pro może zrewolucjonizować zarządzanie czasem w Twojej firmie."
                        </p>
                        <div class="grid grid-cols-3 gap-8">
                            {STATS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div>
                                            <div class="text-3xl font-bold">{*value}</div>
                                            <div class="text-blue-200 text-sm">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <ContactForm vm=vm />
                        <ContactChannels config=config />
                    </div>
                </div>
            </div>
        </section>
    }
}
