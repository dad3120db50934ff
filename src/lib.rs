//! # GitHub Trending Repositories
//!
//! A small Rust library for finding the most starred GitHub repositories
//! created within a recent time window, and rendering them as a text report.
//!
//! ## Main Components
//!
//! - [`Config`]: the time window and result limit, with validation
//! - [`GitHubSearcher`]: issues the search request and decodes the response
//! - [`format_repositories`]: renders the records as a ranked report
//! - [`Args`]: command line argument structure for the binary
//!
//! ## Example
//!
//! ```no_run
//! use github_trending_lib::{format_repositories, Config, GitHubSearcher, Window};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = Config::new(Window::Month, 5);
//!
//!     let searcher = GitHubSearcher::new()?;
//!     let repos = searcher.fetch_trending(&config).await?;
//!
//!     println!("{}", format_repositories(&repos));
//!     Ok(())
//! }
//! ```

mod args;
mod config;
mod error;
mod formatter;
mod github_searcher;
mod models;

// Re-export main components for documentation and external use
pub use crate::args::{normalize_flags, Args};
pub use crate::config::{Config, ConfigError, Window, MAX_LIMIT};
pub use crate::error::TrendingError;
pub use crate::formatter::{format_number, format_repositories, NO_RESULTS};
pub use crate::github_searcher::{
    build_query, GitHubSearcher, DEFAULT_TIMEOUT, GITHUB_SEARCH_URL,
};
pub use crate::models::{Owner, Repository, SearchResponse};
