use dioxus::prelude::*;

/// One navigation entry. The label is arbitrary markup.
#[derive(Clone, PartialEq)]
pub struct HeaderLink {
    pub label: Element,
    pub url: String,
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    headers: Vec<HeaderLink>,
    #[props(into)]
    home_link: String,
    header_title: Element,
    #[props(optional, default)]
    is_login_supported: bool,
}

#[component]
pub fn Header(props: Props) -> Element {
    rsx! {
        header { class: "flex justify-between items-center w-full py-6 px-8",
            a { class: "flex items-center gap-3 cursor-pointer", href: "{props.home_link}",
                {props.header_title}
            }

            nav { class: "flex items-center gap-8",
                for link in props.headers.iter() {
                    a {
                        key: "{link.url}",
                        class: "border-b-2 border-transparent hover:border-white pb-0.5 transition-colors",
                        href: "{link.url}",
                        {link.label.clone()}
                    }
                }
                if props.is_login_supported {
                    a { class: "font-bold", href: "/login", "Login" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<HeaderLink> {
        vec![
            HeaderLink {
                label: rsx! { "About" },
                url: "/about".to_string(),
            },
            HeaderLink {
                label: rsx! { "Events" },
                url: "/events".to_string(),
            },
        ]
    }

    #[test]
    fn renders_links_in_order() {
        let html = dioxus_ssr::render_element(rsx! {
            Header { headers: links(), home_link: "/", header_title: rsx! { "PINUS" } }
        });
        let about = html.find(r#"href="/about""#).unwrap();
        let events = html.find(r#"href="/events""#).unwrap();
        assert!(about < events);
        assert!(html.contains("PINUS"));
        assert!(!html.contains("Login"));
    }

    #[test]
    fn login_link_only_when_supported() {
        let html = dioxus_ssr::render_element(rsx! {
            Header {
                headers: Vec::new(),
                home_link: "/",
                header_title: rsx! { "PINUS" },
                is_login_supported: true,
            }
        });
        assert!(html.contains(r#"href="/login""#));
    }
}
