use dioxus::prelude::*;
use shared::background::PageBackground;
use ui::Page;

#[component]
pub fn AksaraBoxPage() -> Element {
    rsx! {
        Page {
            title: "Aksara Box",
            description: "Stories and writing from the PINUS community.",
            bg_image: PageBackground::AksaraBox,
            section { class: "flex flex-col gap-6 py-24 px-8 max-w-5xl mx-auto",
                p { class: "text-lg", "Essays, poems and reflections contributed by our members." }
            }
        }
    }
}
