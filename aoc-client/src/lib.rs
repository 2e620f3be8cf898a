//! HTTP client for adventofcode.com.
//!
//! Fetches puzzle pages and personal inputs over a blocking reqwest client
//! (rustls, redirects disabled) and scrapes the title, the statement as
//! Markdown and any revealed answers out of the page HTML.
//!
//! The session cookie is passed per call and only ever lives in a header
//! value marked sensitive; temporary copies are zeroized.

mod client;
mod error;
mod page;

pub use client::{SiteClient, SiteClientBuilder};
pub use error::ClientError;
pub use page::PuzzlePage;
