pub mod client;
pub mod error;
pub mod models;
pub mod traits;

pub use client::{ContentfulClient, ContentfulClientBuilder};
pub use error::{ContentfulError, Result};
pub use traits::ContentSource;
