use dioxus::prelude::*;
use shared::site::PageLink;

#[component]
pub fn Column(title: String, pages: Vec<PageLink>) -> Element {
    rsx! {
        div { class: "link-column flex flex-col",
            p { class: "font-bold mb-5", "{title}" }
            ul { class: "flex flex-col gap-2 text-sm",
                for page in pages.iter() {
                    li { key: "{page.url}",
                        a { class: "hover:underline", href: "{page.url}", "{page.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_links() {
        let html = dioxus_ssr::render_element(rsx! {
            Column {
                title: "About",
                pages: vec![PageLink::new("Team", "/team"), PageLink::new("History", "/history")],
            }
        });
        assert!(html.contains(">About</p>"));
        assert!(html.contains(r#"href="/team""#));
        assert!(html.contains(">Team</a>"));
        assert!(html.find("/team").unwrap() < html.find("/history").unwrap());
    }
}
