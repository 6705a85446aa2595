//! Typed Rust client for the YOURLS URL shortener HTTP API.
//!
//! The crate has a domain layer of strong types, a transport layer for the
//! wire-format quirks of each API action, and a small blocking client layer
//! orchestrating requests. Every call is a single live round trip; nothing is
//! cached.
//!
//! ```rust,no_run
//! use yourls::YourlsClient;
//!
//! fn main() -> Result<(), yourls::YourlsError> {
//!     let client = YourlsClient::builder("https://sho.rt/yourls-api.php")
//!         .signature("1002a612b4")
//!         .build()?;
//!     let short = client.shorten("https://example.com/", Some("ex"), None)?;
//!     let long = client.expand(&short.short_url)?;
//!     println!("{} -> {long}", short.short_url);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod convenience;
pub mod domain;
mod transport;

pub use client::{Auth, YourlsClient, YourlsClientBuilder, YourlsError};
pub use convenience::{ServerArgs, get_server};
pub use domain::{
    ConfigurationError, DEFAULT_STATS_LIMIT, DbStats, LinkStats, OutputFormat, ShortenedUrl,
    StatsFilter, StatsReport,
};
