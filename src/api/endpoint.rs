/// The two listing endpoints the movie grid reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Default listing shown when nothing is searched
    Discover,
    /// Free-text search, carrying the query exactly as typed
    Search(String),
}

impl Endpoint {
    /// Derives the endpoint for the current `search` query parameter.
    ///
    /// The router hands an absent parameter over as an empty string, so both
    /// cases fall back to the discovery listing.
    pub fn from_query(query: &str) -> Self {
        if query.is_empty() {
            Endpoint::Discover
        } else {
            Endpoint::Search(query.to_string())
        }
    }

    /// Path relative to the API base. The query text is inserted verbatim.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Discover => "/discover/movie".to_string(),
            Endpoint::Search(query) => format!("/search/movie?query={}", query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_discover() {
        assert_eq!(Endpoint::from_query(""), Endpoint::Discover);
        assert_eq!(Endpoint::from_query("").path(), "/discover/movie");
    }

    #[test]
    fn test_query_is_search_verbatim() {
        let endpoint = Endpoint::from_query("star wars & co");
        assert_eq!(endpoint, Endpoint::Search("star wars & co".to_string()));
        assert_eq!(endpoint.path(), "/search/movie?query=star wars & co");
    }

    #[test]
    fn test_whitespace_query_still_searches() {
        assert_eq!(Endpoint::from_query(" "), Endpoint::Search(" ".to_string()));
    }
}
