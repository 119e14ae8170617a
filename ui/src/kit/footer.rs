use dioxus::prelude::*;
use shared::site::LinkColumn;

use super::Column;

#[component]
pub fn Footer(links: Vec<LinkColumn>, right_side: Element) -> Element {
    rsx! {
        footer { class: "flex flex-row justify-between items-start bg-secondary font-sans w-full p-12 gap-8",
            div { class: "flex flex-row justify-between",
                for (index, column) in links.iter().enumerate() {
                    div { class: "w-content mr-16", key: "{column.title}-{index}",
                        Column { title: column.title.clone(), pages: column.pages.clone() }
                    }
                }
            }
            {right_side}
        }
    }
}
