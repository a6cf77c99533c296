use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::Home;

mod api;
mod components;
mod search;
mod utils;
mod views;

use api::TmdbClient;
use utils::config::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/?:search")]
    Home { search: String },
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Marquee")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Resolved once; a broken configuration is shown instead of the catalog
    let settings = use_hook(|| {
        Settings::load().map_err(|e| {
            tracing::error!("Invalid configuration: {}", e);
            e.to_string()
        })
    });

    match settings {
        Err(err) => rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }

            div { class: "error-container",
                div { class: "error-banner", "⚠️ Invalid configuration: {err}" }
                div { class: "error-body",
                    h2 { "Cannot Reach the Movie API" }
                    p {
                        "Set TMDB_ACCESS_TOKEN or TMDB_API_KEY, or save a read access token to ~/.marquee/tmdb_token, then restart."
                    }
                }
            }
        },
        Ok(settings) => rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }

            Catalog { settings }
        },
    }
}

/// Provides the API client and settings to the routed views
#[component]
fn Catalog(settings: Settings) -> Element {
    use_context_provider(|| TmdbClient::new(&settings));
    use_context_provider(|| settings.clone());

    rsx! {
        Router::<Route> {}
    }
}
