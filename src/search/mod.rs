//! State behind the movie grid: the debounced keystroke handling and the
//! board of results that fetches settle into.

pub mod board;
pub mod controller;
pub mod debounce;

pub use board::*;
pub use controller::*;
pub use debounce::*;
