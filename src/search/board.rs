use std::collections::HashSet;

use dioxus::logger::tracing;

use crate::api::{ApiResult, Movie};

/// Which response wins when fetches for different queries overlap.
///
/// `LastResolved` is how the page originally behaved; `LatestIssued` is the
/// default so the grid always answers the most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Responses to anything but the most recently issued fetch are dropped
    #[default]
    LatestIssued,
    /// Every response is applied, so the one that resolves last wins
    LastResolved,
}

/// Tag handed out for every issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: String,
}

impl FetchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Results shown in the grid, the text in the search field and the two
/// loading flags.
///
/// `is_loading` starts out true and only the first settled success clears it;
/// later query changes never set it again. `search_loading` drives the
/// spinner in the search bar. `draft` follows the query parameter whenever a
/// fetch is issued and the keystrokes in between.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieBoard {
    movies: Vec<Movie>,
    is_loading: bool,
    search_loading: bool,
    draft: String,
    ordering: ResponseOrdering,
    issued: u64,
    current_query: Option<String>,
}

impl Default for MovieBoard {
    fn default() -> Self {
        Self::new(ResponseOrdering::default())
    }
}

impl MovieBoard {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            movies: Vec::new(),
            is_loading: true,
            search_loading: false,
            draft: String::new(),
            ordering,
            issued: 0,
            current_query: None,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn search_loading(&self) -> bool {
        self.search_loading
    }

    /// Text shown in the search field
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Query of the most recently issued fetch
    pub fn current_query(&self) -> Option<&str> {
        self.current_query.as_deref()
    }

    /// A keystroke left `value` in the search field.
    pub fn begin_search(&mut self, value: &str) {
        self.draft = value.to_string();
        self.search_loading = true;
    }

    /// Registers a fetch for `query` and returns its ticket. The search
    /// field is reset to `query`.
    pub fn issue(&mut self, query: &str) -> FetchTicket {
        self.issued += 1;
        self.draft = query.to_string();
        self.current_query = Some(query.to_string());
        FetchTicket {
            seq: self.issued,
            query: query.to_string(),
        }
    }

    /// Whether a response for `ticket` would still be applied
    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        match self.ordering {
            ResponseOrdering::LastResolved => true,
            ResponseOrdering::LatestIssued => {
                ticket.seq == self.issued
                    && self.current_query.as_deref() == Some(ticket.query.as_str())
            }
        }
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// A failure only clears the search spinner; `is_loading` and the current
    /// movies are left as they were. The error is handed back so the caller
    /// can report it.
    pub fn settle(&mut self, ticket: FetchTicket, outcome: ApiResult<Vec<Movie>>) -> ApiResult<()> {
        if !self.accepts(&ticket) {
            tracing::debug!(
                "Discarding response for '{}', a newer fetch for '{}' is pending",
                ticket.query(),
                self.current_query().unwrap_or_default()
            );
            return outcome.map(|_| ());
        }

        match outcome {
            Ok(movies) => {
                self.movies = unique_by_id(movies);
                self.is_loading = false;
                self.search_loading = false;
                Ok(())
            }
            Err(err) => {
                self.search_loading = false;
                Err(err)
            }
        }
    }

    /// The debounce fired with `value`. Returns `false` when `value` is what
    /// is already being shown: no navigation and no fetch will follow, so
    /// the spinner is cleared here instead.
    pub fn settle_navigation(&mut self, value: &str) -> bool {
        if self.current_query() == Some(value) {
            self.search_loading = false;
            false
        } else {
            true
        }
    }
}

/// Keeps the first movie for every id so render keys stay unique.
fn unique_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::with_capacity(movies.len());
    movies.into_iter().filter(|movie| seen.insert(movie.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: Some(format!("Movie {}", id)),
            overview: None,
            poster_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }
    }

    fn ids(board: &MovieBoard) -> Vec<u64> {
        board.movies().iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_new_board_is_loading() {
        let board = MovieBoard::default();
        assert!(board.is_loading());
        assert!(!board.search_loading());
        assert!(board.movies().is_empty());
        assert_eq!(board.current_query(), None);
    }

    #[test]
    fn test_success_replaces_movies_in_order() {
        let mut board = MovieBoard::default();
        let ticket = board.issue("");
        board
            .settle(ticket, Ok(vec![movie(1), movie(2), movie(3)]))
            .unwrap();

        assert_eq!(ids(&board), vec![1, 2, 3]);
        assert!(!board.is_loading());
        assert!(!board.search_loading());
    }

    #[test]
    fn test_failure_keeps_loading_and_clears_spinner() {
        let mut board = MovieBoard::default();
        board.begin_search("mat");
        let ticket = board.issue("matrix");

        let result = board.settle(ticket, Err(failure()));

        assert!(matches!(result, Err(ApiError::Status { status: 503, .. })));
        assert!(board.is_loading());
        assert!(!board.search_loading());
    }

    #[test]
    fn test_failure_after_success_keeps_previous_movies() {
        let mut board = MovieBoard::default();
        let first = board.issue("");
        board.settle(first, Ok(vec![movie(7)])).unwrap();

        board.begin_search("mat");
        let second = board.issue("dune");
        assert!(board.settle(second, Err(failure())).is_err());

        assert_eq!(ids(&board), vec![7]);
        assert!(!board.is_loading());
        assert!(!board.search_loading());
    }

    #[test]
    fn test_later_query_does_not_reset_loading() {
        let mut board = MovieBoard::default();
        let first = board.issue("");
        board.settle(first, Ok(vec![movie(1)])).unwrap();
        board.issue("alien");
        assert!(!board.is_loading());
        assert_eq!(ids(&board), vec![1]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut board = MovieBoard::default();
        let ticket = board.issue("");
        let mut dup = movie(2);
        dup.title = Some("Duplicate".to_string());
        board
            .settle(ticket, Ok(vec![movie(2), movie(1), dup]))
            .unwrap();

        assert_eq!(ids(&board), vec![2, 1]);
        assert_eq!(board.movies()[0].title.as_deref(), Some("Movie 2"));
    }

    #[test]
    fn test_last_resolved_lets_late_response_win() {
        let mut board = MovieBoard::new(ResponseOrdering::LastResolved);
        let mount = board.issue("");
        board.settle(mount, Ok(vec![movie(9)])).unwrap();

        let matrix = board.issue("matrix");
        let matrix2 = board.issue("matrix2");
        board.settle(matrix2, Ok(vec![movie(2)])).unwrap();
        board.settle(matrix, Ok(vec![movie(1)])).unwrap();

        assert_eq!(ids(&board), vec![1]);
    }

    #[test]
    fn test_latest_issued_discards_stale_response() {
        let mut board = MovieBoard::new(ResponseOrdering::LatestIssued);
        let matrix = board.issue("matrix");
        let matrix2 = board.issue("matrix2");
        assert!(!board.accepts(&matrix));

        board.settle(matrix2, Ok(vec![movie(2)])).unwrap();
        board.settle(matrix, Ok(vec![movie(1)])).unwrap();

        assert_eq!(ids(&board), vec![2]);
    }

    #[test]
    fn test_latest_issued_stale_response_before_newer_keeps_spinner() {
        let mut board = MovieBoard::new(ResponseOrdering::LatestIssued);
        let matrix = board.issue("matrix");
        board.begin_search("mat");
        let matrix2 = board.issue("matrix2");

        board.settle(matrix, Ok(vec![movie(1)])).unwrap();
        assert!(board.is_loading());
        assert!(board.search_loading());
        assert!(board.movies().is_empty());

        board.settle(matrix2, Ok(vec![movie(2)])).unwrap();
        assert_eq!(ids(&board), vec![2]);
        assert!(!board.search_loading());
    }

    #[test]
    fn test_stale_failure_still_reported_without_touching_flags() {
        let mut board = MovieBoard::new(ResponseOrdering::LatestIssued);
        let old = board.issue("old");
        board.begin_search("mat");
        board.issue("new");

        assert!(board.settle(old, Err(failure())).is_err());
        assert!(board.search_loading());
    }

    #[test]
    fn test_settle_navigation_same_query_clears_spinner() {
        let mut board = MovieBoard::default();
        board.issue("matrix");
        board.begin_search("mat");

        assert!(!board.settle_navigation("matrix"));
        assert!(!board.search_loading());

        board.begin_search("mat");
        assert!(board.settle_navigation("matrix reloaded"));
        assert!(board.search_loading());
    }

    #[test]
    fn test_ticket_remembers_query() {
        let mut board = MovieBoard::default();
        let ticket = board.issue("heat");
        assert_eq!(ticket.query(), "heat");
        assert_eq!(board.current_query(), Some("heat"));
    }

    #[test]
    fn test_draft_follows_keystrokes_then_query() {
        let mut board = MovieBoard::default();
        assert_eq!(board.draft(), "");

        board.issue("heat");
        assert_eq!(board.draft(), "heat");

        board.begin_search("heat 2");
        assert_eq!(board.draft(), "heat 2");
        assert_eq!(board.current_query(), Some("heat"));

        board.issue("ronin");
        assert_eq!(board.draft(), "ronin");
    }
}
