use dioxus::prelude::*;
use shared::site::{site, FACEBOOK_ICON, INSTAGRAM_ICON};

/// "Contact Us" blurb with the social profile links.
#[component]
pub fn ContactBlock() -> Element {
    let contact = &site().contact;

    rsx! {
        div { class: "w-48 lg:w-64",
            p { class: "font-bold lg:text-base mb-5", "{contact.heading}" }
            p { class: "text-xs lg:text-sm mb-10 lg:mb-5", "{contact.blurb}" }
            div { class: "flex flex-row w-14 justify-between",
                a { href: "{contact.facebook}", target: "_blank", rel: "noopener",
                    img {
                        alt: "Facebook profile",
                        src: FACEBOOK_ICON,
                        height: "20",
                        width: "20",
                    }
                }
                a { href: "{contact.instagram}", target: "_blank", rel: "noopener",
                    img {
                        alt: "Instagram profile",
                        src: INSTAGRAM_ICON,
                        height: "20",
                        width: "20",
                    }
                }
            }
        }
    }
}
