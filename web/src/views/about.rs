use dioxus::prelude::*;
use shared::background::PageBackground;
use ui::Page;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Page {
            title: "About Us",
            description: "Our history, our mission and the people behind PINUS.",
            bg_image: PageBackground::About,
            section { class: "flex flex-col gap-6 py-24 px-8 max-w-5xl mx-auto",
                h2 { class: "text-4xl font-bold", "Our mission" }
                p { class: "text-lg",
                    "To support every Indonesian student at NUS, from admission to graduation."
                }
                h2 { id: "team", class: "text-4xl font-bold mt-12", "Team" }
                p { class: "text-lg", "Meet the committee serving this academic year." }
            }
        }
    }
}
