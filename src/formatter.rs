//! Plain-text rendering of search results.

use crate::models::Repository;

/// Printed instead of a report when the search came back empty.
pub const NO_RESULTS: &str = "No trending repositories found.";

const LINE_WIDTH: usize = 100;
const HEADER_RULE: char = '═';
const SEPARATOR: char = '─';
const MAX_DESCRIPTION_CHARS: usize = 80;
const TRUNCATED_DESCRIPTION_CHARS: usize = 77;

/// Render a ranked report, one block per repository in the order given.
pub fn format_repositories(repos: &[Repository]) -> String {
    if repos.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut out = String::new();
    out.push_str("🌟 Trending Repositories\n");
    out.push_str(&rule(HEADER_RULE));
    out.push_str("\n\n");

    for (i, repo) in repos.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&rule(SEPARATOR));
            out.push('\n');
        }
        write_repository(&mut out, i + 1, repo);
    }

    out
}

/// Abbreviate a count: `999`, `1.5k`, `2.3M`.
pub fn format_number(n: u64) -> String {
    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    }
}

fn write_repository(out: &mut String, rank: usize, repo: &Repository) {
    out.push_str(&format!("#{} {}\n", rank, repo.full_name));
    out.push_str(&format!("    URL: {}\n", repo.html_url));

    if let Some(desc) = non_empty(&repo.description) {
        out.push_str(&format!("    Description: {}\n", truncate(desc)));
    }

    out.push_str(&format!("    ⭐ Stars: {}", format_number(repo.stargazers_count)));
    if let Some(language) = non_empty(&repo.language) {
        out.push_str(&format!(" | 💻 Language: {}", language));
    }
    out.push_str(&format!(" | 🔱 Forks: {}", format_number(repo.forks_count)));
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn truncate(desc: &str) -> String {
    if desc.chars().count() <= MAX_DESCRIPTION_CHARS {
        return desc.to_string();
    }
    let mut short: String = desc.chars().take(TRUNCATED_DESCRIPTION_CHARS).collect();
    short.push_str("...");
    short
}

fn rule(c: char) -> String {
    c.to_string().repeat(LINE_WIDTH)
}
