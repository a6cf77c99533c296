use dioxus::prelude::*;

use crate::api::Movie;
use crate::utils::format;

const MOVIE_CARD_CSS: Asset = asset!("/assets/styling/movie_card.css");

#[derive(Props, PartialEq, Clone)]
pub struct MovieCardProps {
    movie: Movie,
}

#[component]
pub fn MovieCard(props: MovieCardProps) -> Element {
    let movie = &props.movie;
    let title = movie.display_title().to_string();
    let year = movie
        .release_date
        .as_deref()
        .and_then(format::release_year)
        .map(str::to_string);
    let rating = movie.vote_average.map(format::rating);
    let poster = movie.poster_path.as_deref().map(format::poster_url);

    rsx! {
        document::Link { rel: "stylesheet", href: MOVIE_CARD_CSS }
        div { class: "movie-card",
            if let Some(poster) = poster {
                img { class: "movie-poster", src: "{poster}", alt: "{title}" }
            } else {
                div { class: "movie-poster movie-poster-empty", "No poster" }
            }
            div { class: "movie-info",
                h3 { class: "movie-title", "{title}" }
                div { class: "movie-meta",
                    if let Some(year) = year {
                        span { class: "movie-year", "{year}" }
                    }
                    if let Some(rating) = rating {
                        span { class: "movie-rating", "★ {rating}" }
                    }
                }
                if let Some(overview) = movie.overview.clone() {
                    p { class: "movie-overview", "{overview}" }
                }
            }
        }
    }
}
