use dioxus::prelude::*;
use dioxus_hooks::use_reactive;

use crate::api::TmdbClient;
use crate::components::{Banner, MovieCard, SearchInput};
use crate::search::{keystroke, refresh, Debouncer, MovieBoard};
use crate::utils::config::Settings;
use crate::Route;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

/// Movie grid for the `search` query parameter, with the type-to-search field.
///
/// The query parameter is the only source of truth for what is searched:
/// typing goes through the debouncer into a navigation, and the navigation
/// comes back here as a new `search` prop.
#[component]
pub fn Home(search: String) -> Element {
    let client = use_context::<TmdbClient>();
    let settings = use_context::<Settings>();
    let nav = navigator();

    let board = use_signal(|| MovieBoard::new(settings.ordering));
    let debouncer = use_hook(|| Debouncer::new(settings.debounce));

    // A navigation still waiting out the quiet window must not outlive the view
    use_drop({
        let debouncer = debouncer.clone();
        move || debouncer.cancel()
    });

    // Runs on mount and whenever the query parameter changes
    use_effect(use_reactive((&search,), move |(search,)| {
        spawn(refresh(client.clone(), board, &search));
    }));

    let on_input = move |value: String| {
        spawn(keystroke(board, &debouncer, value, move |search| {
            nav.push(Route::Home { search });
        }));
    };

    let state = board.read();

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }
        div { class: "root-container",
            Banner {}
            div { class: "catalog",
                div { class: "catalog-header",
                    SearchInput {
                        query: state.draft().to_string(),
                        searching: state.search_loading(),
                        on_input: on_input
                    }
                }
                div { class: "movies-grid",
                    if !state.is_loading() {
                        for movie in state.movies() {
                            MovieCard { key: "{movie.id}", movie: movie.clone() }
                        }
                    }
                }
            }
        }
    }
}
