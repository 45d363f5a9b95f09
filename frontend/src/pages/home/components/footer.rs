use crate::utils::{dom::SectionId, time::current_year};
use leptos::*;

struct FooterColumn {
    heading: &'static str,
    links: &'static [(&'static str, Option<SectionId>)],
}

const COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Produkt",
        links: &[
            ("Funkcje", Some(SectionId::Features)),
            ("Cennik", None),
            ("Integracje", None),
            ("API", None),
        ],
    },
    FooterColumn {
        heading: "Firma",
        links: &[
            ("O nas", None),
            ("Kariera", None),
            ("Blog", None),
            ("Kontakt", Some(SectionId::Contact)),
        ],
    },
    FooterColumn {
        heading: "Wsparcie",
        links: &[
            ("Pomoc", None),
            ("Dokumentacja", None),
            ("Status", None),
            ("Bezpieczeństwo", None),
        ],
    },
];

const LEGAL: [&str; 3] = ["Polityka prywatności", "Regulamin", "Cookies"];

fn link_href(target: Option<SectionId>) -> String {
    target.map(|s| s.href()).unwrap_or_else(|| "#".to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-blue-600 rounded-xl flex items-center justify-center mr-3">
                                <i class="fas fa-clock text-white"></i>
                            </div>
                            <span class="text-xl font-bold">"TimeTracker Pro"</span>
                        </div>
                        <p class="text-gray-400">
                            "Nowoczesne rozwiązanie do zarządzania czasem pracy dla małych i średnich firm."
                        </p>
                    </div>
                    {COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="text-lg font-semibold mb-4">{column.heading}</h4>
                                    <ul class="space-y-2 text-gray-400">
                                        {column
                                            .links
                                            .iter()
                                            .map(|(label, target)| {
                                                view! {
                                                    <li>
                                                        <a href=link_href(*target) class="hover:text-white transition-colors">
                                                            {*label}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="border-t border-gray-800 mt-12 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400">
                        {format!("© {} TimeTracker Pro. Wszystkie prawa zastrzeżone.", current_year())}
                    </p>
                    <div class="flex space-x-6 mt-4 md:mt-0">
                        {LEGAL
                            .iter()
                            .map(|label| view! { <a href="#" class="text-gray-400 hover:text-white transition-colors">{*label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn footer_links_to_in_page_sections() {
        let html = render_to_string(|| view! { <Footer /> });
        assert!(html.contains("href=\"#features\""));
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains(&format!("© {} TimeTracker Pro", current_year())));
    }

    #[test]
    fn unresolved_links_point_at_page_top() {
        assert_eq!(link_href(None), "#");
        assert_eq!(link_href(Some(SectionId::Features)), "#features");
    }
}
