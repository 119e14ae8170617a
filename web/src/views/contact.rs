use dioxus::prelude::*;
use shared::{background::PageBackground, site::site};
use ui::Page;

#[component]
pub fn ContactPage() -> Element {
    let contact = &site().contact;

    rsx! {
        Page {
            title: "Contact Us",
            description: "{contact.blurb}",
            bg_image: PageBackground::Contact,
            section { class: "flex flex-col gap-6 py-24 px-8 max-w-5xl mx-auto",
                a { class: "text-lg underline", href: "{contact.facebook}", target: "_blank", "Facebook" }
                a { class: "text-lg underline", href: "{contact.instagram}", target: "_blank", "Instagram" }
            }
        }
    }
}
