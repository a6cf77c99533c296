//! What the movie page does when its query parameter changes and when a key
//! is pressed in the search field, independent of the component that hosts it.

use std::future::Future;

use dioxus::logger::tracing;
use dioxus::prelude::{Signal, Writable};

use super::board::MovieBoard;
use super::debounce::Debouncer;
use crate::api::{ApiResult, Endpoint, Movie, TmdbClient};

/// Anything that can answer an endpoint with a movie list.
#[allow(async_fn_in_trait)]
pub trait MovieSource: Clone + 'static {
    async fn load(&self, endpoint: &Endpoint) -> ApiResult<Vec<Movie>>;
}

impl MovieSource for TmdbClient {
    async fn load(&self, endpoint: &Endpoint) -> ApiResult<Vec<Movie>> {
        self.movies(endpoint).await
    }
}

/// Mutable access to the board, however the caller stores it.
pub trait BoardHandle: Clone + 'static {
    fn update<R>(&mut self, f: impl FnOnce(&mut MovieBoard) -> R) -> R;
}

impl BoardHandle for Signal<MovieBoard> {
    fn update<R>(&mut self, f: impl FnOnce(&mut MovieBoard) -> R) -> R {
        f(&mut self.write())
    }
}

/// The query parameter is now `search`.
///
/// Resets the search field and registers the fetch right away, so tickets
/// follow the order of query changes. The returned future runs the fetch
/// and settles it into the board.
pub fn refresh<S, B>(source: S, mut board: B, search: &str) -> impl Future<Output = ()> + 'static
where
    S: MovieSource,
    B: BoardHandle,
{
    let endpoint = Endpoint::from_query(search);
    let ticket = board.update(|b| b.issue(search));

    async move {
        let outcome = source.load(&endpoint).await;
        if let Err(e) = board.update(|b| b.settle(ticket, outcome)) {
            tracing::error!("Error fetching movies: {}", e);
        }
    }
}

/// A keystroke left `value` in the search field.
///
/// Shows the spinner right away. The returned future waits out the quiet
/// window and calls `navigate` only if no later keystroke arrived and
/// `value` differs from the query already on screen.
pub fn keystroke<B, N>(
    mut board: B,
    debouncer: &Debouncer,
    value: String,
    navigate: N,
) -> impl Future<Output = ()> + 'static
where
    B: BoardHandle,
    N: FnOnce(String) + 'static,
{
    board.update(|b| b.begin_search(&value));
    let pending = debouncer.arm();
    let window = debouncer.window();

    async move {
        if !pending.settled().await {
            return;
        }
        if board.update(|b| b.settle_navigation(&value)) {
            tracing::debug!("Navigating to search '{}' after {:?} of quiet", value, window);
            navigate(value);
        }
    }
}
