use dioxus::prelude::*;
use shared::background::PageBackground;
use ui::Page;

#[component]
pub fn AdmissionsPage() -> Element {
    rsx! {
        Page {
            title: "Admissions",
            description: "Everything you need to know about applying to NUS.",
            bg_image: PageBackground::Admissions,
            section { class: "flex flex-col gap-6 py-24 px-8 max-w-5xl mx-auto",
                h2 { class: "text-4xl font-bold", "Admissions guide" }
                p { class: "text-lg",
                    "Application timelines, scholarship options and tips from current students."
                }
                h2 { id: "faq", class: "text-4xl font-bold mt-12", "FAQ" }
            }
        }
    }
}
