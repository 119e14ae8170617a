use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    title: Element,
    /// `None` renders the banner without any background image.
    #[props(optional)]
    bg_image: Option<String>,
    sub_header: Element,
}

/// Inline style for a background image. The URL is quoted so spaces and
/// parentheses in file names survive.
pub fn background_style(url: &str) -> String {
    let escaped = url.replace('\\', "\\\\").replace('\'', "\\'");
    format!("background-image: url('{escaped}');")
}

#[component]
pub fn Banner(props: Props) -> Element {
    let content = rsx! {
        div { class: "flex flex-col items-center justify-center gap-6 max-w-4xl text-center px-8",
            {props.title}
            {props.sub_header}
        }
    };

    match props.bg_image {
        Some(url) => rsx! {
            section {
                class: "flex items-center justify-center w-full h-screen bg-cover bg-center bg-primary",
                style: background_style(&url),
                {content}
            }
        },
        None => rsx! {
            section { class: "flex items-center justify-center w-full h-screen bg-primary",
                {content}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_url_becomes_style() {
        let html = dioxus_ssr::render_element(rsx! {
            Banner {
                title: rsx! { "Hello" },
                bg_image: "//cdn/home.jpg".to_string(),
                sub_header: rsx! { "sub" },
            }
        });
        assert!(html.contains("background-image: url("));
        assert!(html.contains("//cdn/home.jpg"));
        assert!(html.contains("Hello"));
        assert!(html.contains("sub"));
    }

    #[test]
    fn missing_background_has_no_style() {
        let html = dioxus_ssr::render_element(rsx! {
            Banner { title: rsx! { "Hello" }, sub_header: rsx! { div {} } }
        });
        assert!(!html.contains("background-image"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn background_url_is_quoted() {
        assert_eq!(
            background_style("//cdn/my image (1).jpg"),
            "background-image: url('//cdn/my image (1).jpg');"
        );
    }

    #[test]
    fn quotes_in_url_are_escaped() {
        assert_eq!(
            background_style("//cdn/it's.jpg"),
            r"background-image: url('//cdn/it\'s.jpg');"
        );
    }
}
