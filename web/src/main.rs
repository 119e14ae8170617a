use dioxus::prelude::*;
use shared::site::SITE_ICON;

use views::{
    AboutPage, AdmissionsPage, AksaraBoxPage, ContactPage, EventsPage, HomePage, NotFound,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomePage {},
    #[route("/about")]
    AboutPage {},
    #[route("/admissions")]
    AdmissionsPage {},
    #[route("/events")]
    EventsPage {},
    #[route("/contact")]
    ContactPage {},
    #[route("/aksara-box")]
    AksaraBoxPage {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let config = &*api::config::CONFIG;
        tracing::info!(
            "Starting server on {}:{} (content service {})",
            config.ip,
            config.port,
            if config.has_content_service() { "enabled" } else { "disabled" }
        );

        dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
    }

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: SITE_ICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
