//! The components module contains the shared building blocks of the movie page:
//! the header banner, the search field and the movie card.

mod banner;
pub use banner::Banner;

mod movie_card;
pub use movie_card::MovieCard;

mod search_input;
pub use search_input::SearchInput;
