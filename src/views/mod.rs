//! The views module contains the components for all Layouts and Routes for our app.

mod home;
pub use home::Home;
