use dioxus::prelude::*;
use ui::Page;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Page {
            title: "Page not found",
            description: "Nothing lives at {path}.",
            section { class: "flex flex-col items-center gap-6 py-24",
                Link { class: "underline", to: Route::HomePage {}, "Back to home" }
            }
        }
    }
}
