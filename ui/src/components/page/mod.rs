//! The shared page template.
//!
//! [`Page`] owns the image fetch and hands its state to [`PageView`], which
//! renders nothing but a placeholder until the images have loaded.

mod head;

use api::get_images;
use dioxus::prelude::*;
use dioxus::router::try_router;
use shared::{
    background::{BackgroundMapping, PageBackground},
    content::ContentEntry,
    fetch::FetchState,
    head::HeadMeta,
    site::site,
};
use tracing::{debug, warn};

use crate::components::ContactBlock;
use crate::kit::{self, Banner, Header, HeaderLink, Text};
use head::PageHead;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    #[props(into)]
    title: String,
    #[props(into)]
    description: String,
    /// Hero background. Keys without a fetched image render no background.
    bg_image: Option<PageBackground>,
    /// Replaces the description under the banner title.
    render_subcontent: Option<Callback<(), Element>>,
    children: Element,
    #[props(default = true)]
    render_banner: bool,
    #[props(default = true)]
    render_navbar: bool,
}

#[component]
pub fn Page(props: Props) -> Element {
    // Runs once per mount. The task belongs to this scope and is dropped on
    // unmount, so a late response never writes into a dead component.
    let images = use_resource(|| async move {
        let result = get_images().await;
        match &result {
            Ok(entries) => debug!("Loaded {} image entries", entries.len()),
            Err(e) => warn!("Failed to load page images: {}", e),
        }
        result
    });

    let content = {
        let outcome = images.read();
        FetchState::from_outcome((*outcome).as_ref())
            .map(|entries: Vec<ContentEntry>| BackgroundMapping::from_entries(&entries))
    };

    rsx! {
        PageView {
            content,
            path: current_path(),
            title: props.title,
            description: props.description,
            bg_image: props.bg_image,
            render_subcontent: props.render_subcontent,
            render_banner: props.render_banner,
            render_navbar: props.render_navbar,
            {props.children}
        }
    }
}

fn current_path() -> String {
    try_router()
        .map(|router| router.full_route_string())
        .unwrap_or_else(|| "/".to_string())
}

#[derive(Props, Clone, PartialEq)]
pub struct ViewProps {
    content: FetchState<BackgroundMapping>,
    #[props(into)]
    path: String,
    #[props(into)]
    title: String,
    #[props(into)]
    description: String,
    bg_image: Option<PageBackground>,
    render_subcontent: Option<Callback<(), Element>>,
    children: Element,
    #[props(default = true)]
    render_banner: bool,
    #[props(default = true)]
    render_navbar: bool,
}

#[component]
pub fn PageView(props: ViewProps) -> Element {
    let mapping = match &props.content {
        FetchState::Loaded(mapping) => mapping,
        // A failed fetch looks the same as a pending one.
        FetchState::Pending | FetchState::Failed(_) => return rsx! { div {} },
    };

    let site = site();
    let bg_image = props
        .bg_image
        .and_then(|bg| mapping.resolve(bg))
        .map(str::to_string);
    let meta = HeadMeta::new(&props.title, &props.description, &props.path);

    let headers: Vec<HeaderLink> = site
        .nav_links
        .iter()
        .map(|link| HeaderLink {
            label: rsx! {
                Text { color: "white", " {link.title} " }
            },
            url: link.href(),
        })
        .collect();

    let sub_header = match props.render_subcontent {
        Some(render) => render.call(()),
        None if !props.description.is_empty() => rsx! {
            Text { font_size: "xl", "{props.description}" }
        },
        None => rsx! { div {} },
    };

    rsx! {
        div { class: "flex flex-col items-center overflow-hidden",
            PageHead { meta }
            div { class: "absolute w-full flex flex-col items-center max-w-7xl bg-transparent",
                if props.render_navbar {
                    Header {
                        headers,
                        home_link: "/",
                        header_title: rsx! {
                            Text { font_size: "2xl", font_weight: "bold", color: "white", "{site.name}" }
                        },
                        is_login_supported: false,
                    }
                }
            }
            if props.render_banner {
                Banner {
                    title: rsx! {
                        Text { font_size: "5xl", font_weight: "bold", color: "white", "{props.title}" }
                    },
                    bg_image,
                    sub_header,
                }
            }
            div { class: "min-h-screen w-full", {props.children} }
            kit::Footer { links: site.columns.clone(), right_side: rsx! { ContactBlock {} } }
        }
    }
}
