use chrono::{Local, NaiveDate, TimeDelta};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::TrendingError;
use crate::models::{Repository, SearchResponse};

/// Public GitHub repository search endpoint.
pub const GITHUB_SEARCH_URL: &str = "https://api.github.com/search/repositories";

/// Upper bound for the whole request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CLIENT_NAME: &str = concat!("github-trending-repos/", env!("CARGO_PKG_VERSION"));
const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
const API_VERSION: &str = "2022-11-28";

/// Client for GitHub's repository search, one request per call.
pub struct GitHubSearcher {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl GitHubSearcher {
    /// Create a searcher against the public GitHub API
    pub fn new() -> Result<Self, TrendingError> {
        Self::with_endpoint(GITHUB_SEARCH_URL, DEFAULT_TIMEOUT)
    }

    /// Create a searcher against another search endpoint (a mirror or a test server)
    pub fn with_endpoint(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TrendingError> {
        let client = Client::builder()
            .user_agent(CLIENT_NAME)
            .timeout(timeout)
            .build()
            .map_err(TrendingError::Client)?;

        Ok(GitHubSearcher {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Fetch the most starred repositories created inside the configured window.
    ///
    /// Records come back in the order GitHub returned them (stars, descending).
    pub async fn fetch_trending(&self, config: &Config) -> Result<Vec<Repository>, TrendingError> {
        let page = self.search(config).await?;
        info!("Fetched {} trending repositories", page.items.len());
        Ok(page.items)
    }

    /// Run the search and return the whole decoded page, totals included.
    pub async fn search(&self, config: &Config) -> Result<SearchResponse, TrendingError> {
        config.validate()?;

        let query = build_query(config, Local::now().date_naive());
        let per_page = config.limit().to_string();

        debug!("Requesting {} with q={} per_page={}", self.base_url, query, per_page);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .header(ACCEPT, ACCEPT_JSON)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            warn!("Search for '{}' failed with status {}", query, status);
            return Err(TrendingError::Api { status, body });
        }

        let page: SearchResponse = serde_json::from_str(&body)?;
        debug!(
            "Search for '{}' matched {} repositories, {} returned",
            query,
            page.total_count,
            page.items.len()
        );
        if page.incomplete_results {
            warn!("GitHub reported incomplete results for '{}'", query);
        }

        Ok(page)
    }

    fn transport_error(&self, err: reqwest::Error) -> TrendingError {
        if err.is_timeout() {
            TrendingError::Timeout(self.timeout)
        } else {
            TrendingError::Network(err)
        }
    }
}

/// Build the search query for repositories created after `today` minus the window.
pub fn build_query(config: &Config, today: NaiveDate) -> String {
    let cutoff = today - TimeDelta::days(config.window_in_days());
    format!("created:>{}", cutoff.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Window;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn query_subtracts_window_from_today() {
        let today = date(2026, 10, 17);
        let cases = [
            (Window::Day, "created:>2026-10-16"),
            (Window::Week, "created:>2026-10-10"),
            (Window::Month, "created:>2026-09-17"),
            (Window::Year, "created:>2025-10-17"),
        ];
        for (window, expected) in cases {
            assert_eq!(build_query(&Config::new(window, 10), today), expected);
        }
    }

    #[test]
    fn query_crosses_year_boundary() {
        let query = build_query(&Config::new(Window::Week, 10), date(2026, 1, 3));
        assert_eq!(query, "created:>2025-12-27");
    }

    #[test]
    fn query_pads_month_and_day() {
        let query = build_query(&Config::new(Window::Day, 10), date(2026, 3, 2));
        assert_eq!(query, "created:>2026-03-01");
    }

    #[test]
    fn client_name_carries_version() {
        assert!(CLIENT_NAME.starts_with("github-trending-repos/"));
        assert!(CLIENT_NAME.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
