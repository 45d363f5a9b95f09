use crate::utils::dom::SectionId;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "fa-clock",
        title: "Automatyczne śledzenie czasu",
        description: "Inteligentne wykrywanie aktywności i automatyczne kategoryzowanie zadań. Zapomnij o manualnym wprowadzaniu danych.",
    },
    Feature {
        icon: "fa-chart-line",
        title: "Zaawansowane raporty",
        description: "Szczegółowe analizy produktywności, wykres wydajności zespołu i przejrzyste podsumowania projektów.",
    },
    Feature {
        icon: "fa-file-invoice-dollar",
        title: "Automatyczna fakturacja",
        description: "Generowanie faktur na podstawie śledzonych godzin. Integracja z popularnymi systemami księgowymi.",
    },
    Feature {
        icon: "fa-users",
        title: "Zarządzanie zespołem",
        description: "Przydzielanie zadań, monitorowanie postępów i ułatwiona komunikacja w zespole projektowym.",
    },
    Feature {
        icon: "fa-mobile-alt",
        title: "Aplikacja mobilna",
        description: "Śledź czas w podróży dzięki natywnej aplikacji na iOS i Android. Synchronizacja w czasie rzeczywistym.",
    },
    Feature {
        icon: "fa-plug",
        title: "Integracje API",
        description: "Łączenie z popularnymi narzędziami jak Slack, Trello, Jira i GitLab. Otwarte API dla deweloperów.",
    },
];

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card group bg-white p-8 rounded-2xl shadow-sm hover:shadow-xl transition-all duration-300 border border-gray-100">
            <div class="w-16 h-16 bg-gradient-to-br from-blue-500 to-blue-600 rounded-2xl flex items-center justify-center text-white mb-6 group-hover:scale-110 transition-transform">
                <i class=format!("fas {} text-2xl", feature.icon)></i>
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-4">{feature.title}</h3>
            <p class="text-gray-600 leading-relaxed">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=SectionId::Features.as_str() class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-20">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-6">
                        "Wszystko czego potrzebujesz w jednym miejscu"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Kompleksowe rozwiązanie do zarządzania czasem i projektami"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
