use dioxus::prelude::*;
use shared::site::{site, LinkColumn};

use super::ContactBlock;
use crate::kit::Column;

/// Static site footer: identity, link columns and the contact block.
#[component]
pub fn Footer(#[props(default = site().columns.clone())] columns: Vec<LinkColumn>) -> Element {
    let site = site();

    rsx! {
        div { class: "flex flex-row justify-between items-start bg-secondary font-sans w-screen h-96 p-12",
            div { class: "flex flex-col justify-between h-full",
                div { class: "flex flex-row justify-start items-center",
                    img {
                        src: "{site.icon}",
                        alt: "{site.name} footer logo",
                        height: "70",
                        width: "70",
                    }
                    p { class: "text-3xl font-bold ml-5", "{site.name}" }
                }
                p { class: "text-sm text-gray-400", "{site.copyright}" }
            }
            div { class: "flex flex-row justify-between",
                for (index, column) in columns.iter().enumerate() {
                    div { class: "w-content mr-16", key: "{column.title}-{index}",
                        Column { title: column.title.clone(), pages: column.pages.clone() }
                    }
                }
            }
            ContactBlock {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::site::PageLink;

    #[test]
    fn single_column_scenario() {
        let columns = vec![LinkColumn::new("About", vec![PageLink::new("Team", "/team")])];
        let html = dioxus_ssr::render_element(rsx! {
            Footer { columns }
        });
        assert_eq!(html.matches("link-column").count(), 1);
        assert!(html.contains(">About</p>"));
        assert!(html.contains(r#"href="/team""#));
        assert!(html.contains(">Team</a>"));
    }

    #[test]
    fn columns_keep_input_order() {
        let columns = vec![
            LinkColumn::new("Zeta", vec![PageLink::new("Z", "/z")]),
            LinkColumn::new("Alpha", vec![PageLink::new("A", "/a")]),
            LinkColumn::new("Mid", vec![]),
        ];
        let html = dioxus_ssr::render_element(rsx! {
            Footer { columns }
        });
        assert_eq!(html.matches("link-column").count(), 3);
        let zeta = html.find(">Zeta<").unwrap();
        let alpha = html.find(">Alpha<").unwrap();
        let mid = html.find(">Mid<").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn defaults_to_site_columns_and_contact() {
        let html = dioxus_ssr::render_element(rsx! {
            Footer {}
        });
        assert_eq!(html.matches("link-column").count(), site().columns.len());
        assert!(html.contains("PINUS"));
        assert!(html.contains("Contact Us"));
        assert!(html.contains("https://www.instagram.com/pinusonline"));
    }
}
