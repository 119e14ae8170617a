use dioxus::prelude::*;
use shared::head::HeadMeta;

#[component]
pub fn PageHead(meta: HeadMeta) -> Element {
    rsx! {
        document::Meta { charset: "utf-8" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "description", content: meta.description.clone() }
        for (property, content) in meta.open_graph() {
            document::Meta {
                key: "{property}",
                property: property.to_string(),
                content: content.to_string(),
            }
        }
        document::Title { "{meta.title}" }
    }
}
