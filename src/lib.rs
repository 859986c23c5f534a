#[path = "url_builder.rs"]
pub mod url_builder;

#[path = "config.rs"]
pub mod config;

#[path = "error.rs"]
pub mod error;

pub use error::{Result, UrlBuilderError};
pub use url_builder::{url, url_host_port, QueryParam, QueryValue, Segment, UrlBuilder};
