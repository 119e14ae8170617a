use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(optional, into)]
    color: Option<String>,
    #[props(optional, into)]
    font_size: Option<String>,
    #[props(optional, into)]
    font_weight: Option<String>,
}

impl Props {
    fn classes(&self) -> String {
        [
            self.color.as_ref().map(|c| format!("text-{c}")),
            self.font_size.as_ref().map(|s| format!("text-{s}")),
            self.font_weight.as_ref().map(|w| format!("font-{w}")),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[component]
pub fn Text(props: Props) -> Element {
    let classes = props.classes();

    rsx! {
        span { class: "{classes}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_style_props_to_classes() {
        let html = dioxus_ssr::render_element(rsx! {
            Text { color: "white", font_size: "5xl", font_weight: "bold", "Welcome" }
        });
        assert!(html.contains(r#"class="text-white text-5xl font-bold""#));
        assert!(html.contains("Welcome"));
    }

    #[test]
    fn unstyled_text_has_empty_class() {
        let html = dioxus_ssr::render_element(rsx! {
            Text { "plain" }
        });
        assert!(html.contains("plain"));
        assert!(!html.contains("text-"));
    }
}
