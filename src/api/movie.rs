use serde::Deserialize;

/// One entry of a movie listing.
///
/// Only `id` is required; everything else is shown when present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Movie {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// Envelope shared by the discover and search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    pub results: Vec<Movie>,
}
