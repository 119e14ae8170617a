use dioxus::prelude::*;
use shared::background::PageBackground;
use ui::{kit::Text, Page};

use crate::Route;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Page {
            title: "Home",
            description: "Perhimpunan Indonesia NUS, the Indonesian student community at the National University of Singapore.",
            bg_image: PageBackground::Home,
            render_subcontent: move |_| rsx! {
                div { class: "flex flex-col items-center gap-8",
                    Text { font_size: "xl", color: "white",
                        "Home away from home for Indonesian students at NUS."
                    }
                    Link {
                        class: "px-8 py-3 rounded-full bg-white text-primary font-bold",
                        to: Route::AboutPage {},
                        "Get to know us"
                    }
                }
            },
            section { class: "flex flex-col items-center gap-6 py-24 px-8 max-w-5xl mx-auto",
                h2 { class: "text-4xl font-bold", "Who we are" }
                p { class: "text-lg text-center",
                    "PINUS brings together Indonesian undergraduates and graduates at NUS through welfare, cultural and academic events."
                }
            }
        }
    }
}
