use dioxus::prelude::*;
use shared::background::PageBackground;
use ui::Page;

#[component]
pub fn EventsPage() -> Element {
    rsx! {
        Page {
            title: "Events",
            description: "What is happening in the PINUS community.",
            bg_image: PageBackground::Events,
            section { class: "flex flex-col gap-6 py-24 px-8 max-w-5xl mx-auto",
                h2 { class: "text-4xl font-bold", "Upcoming events" }
                p { class: "text-lg", "Orientation, Indonesian Night and more throughout the year." }
            }
        }
    }
}
