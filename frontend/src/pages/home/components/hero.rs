use crate::components::common::{Button, ButtonVariant};
use crate::utils::dom::{scroll_to_section, SectionId};
use leptos::*;

const PERKS: [&str; 3] = [
    "14 dni za darmo",
    "Bez karty kredytowej",
    "Natychmiastowy dostęp",
];

fn scroll_or_log(section: SectionId) {
    if let Err(err) = scroll_to_section(section) {
        log::warn!("cannot scroll to #{}: {}", section.as_str(), err);
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 via-white to-slate-50 overflow-hidden">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-20">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <div class="mb-6">
                            <span class="inline-flex items-center px-4 py-2 rounded-full text-sm font-medium bg-blue-100 text-blue-800 mb-4">
                                "#1 w zarządzaniu czasem pracy"
                            </span>
                        </div>

                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-gray-900 leading-tight mb-8">
                            "Zwiększ produktywność swojego zespołu o "
                            <span class="bg-gradient-to-r from-blue-600 to-blue-700 bg-clip-text text-transparent">
                                "35%"
                            </span>
                        </h1>

                        <p class="text-xl text-gray-600 mb-10 leading-relaxed">
                            "TimeTracker Pro to nowoczesne narzędzie do zarządzania czasem pracy, które pomaga małym i średnim firmom osiągnąć lepsze wyniki. Automatyzuj procesy, śledź czas i zwiększ rentowność projektów."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 mb-12">
                            <Button
                                class="px-8 py-4 text-lg"
                                on:click=move |_| scroll_or_log(SectionId::Contact)
                            >
                                "Rozpocznij bezpłatny okres próbny"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                class="px-8 py-4 text-lg"
                                on:click=move |_| scroll_or_log(SectionId::Features)
                            >
                                "Zobacz funkcje"
                            </Button>
                        </div>

                        <div class="flex flex-wrap items-center gap-8 text-sm text-gray-600">
                            {PERKS
                                .iter()
                                .map(|perk| {
                                    view! {
                                        <div class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-green-500 mr-2"></span>
                                            {*perk}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1551434678-e076c223a692"
                            alt="Zespół pracujący efektywnie z TimeTracker Pro"
                            class="rounded-2xl shadow-2xl w-full"
                        />
                        <div class="absolute -top-6 -left-6 bg-white rounded-xl shadow-lg p-4">
                            <div class="flex items-center">
                                <span class="w-3 h-3 bg-green-500 rounded-full mr-3 animate-pulse"></span>
                                <span class="text-sm font-semibold text-gray-800">"5,847 aktywnych użytkowników"</span>
                            </div>
                        </div>
                        <div class="absolute -bottom-6 -right-6 bg-white rounded-xl shadow-lg p-4">
                            <div class="text-center">
                                <div class="text-2xl font-bold text-blue-600">"+35%"</div>
                                <div class="text-sm text-gray-600">"wzrost produktywności"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
