#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::{template::SiteLayout, toast::{use_toaster, Toaster}};
use dioxus::{logger::tracing::warn, prelude::*};
use pages::{ai_agents::AiAgents, home::Home, smart_websites::SmartWebsites};

#[derive(Routable, PartialEq, Clone, Debug)]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/smart-websites")]
    SmartWebsites {},
    #[route("/ai-agents")]
    AiAgents {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    static CSS: Asset = asset!("/assets/main.css");
    let toasts = use_toaster();

    use_hook(|| {
        if !utils::store::RestStore::from_build_env().is_configured() {
            warn!("persistence not configured, contact forms will report failures");
        }
    });

    rsx! {
        document::Stylesheet {href: CSS},
        Router::<Route> {}
        Toaster { toasts }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "We are terribly sorry, but the page you requested doesn't exist." }
            pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
            Link { class: "button button-primary", to: Route::Home {}, "Back to home" }
        }
    }
}
