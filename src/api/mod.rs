pub mod client;
pub mod endpoint;
pub mod error;
pub mod movie;

pub use client::*;
pub use endpoint::*;
pub use error::*;
pub use movie::*;
