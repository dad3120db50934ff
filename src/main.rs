use clap::Parser;
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use github_trending_lib::{
    format_repositories, normalize_flags, Args, GitHubSearcher, TrendingError,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    // Logs go to stderr so stdout only carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_from(normalize_flags(std::env::args_os()));

    match run(&args).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Fetching trending repositories failed: {:?}", e);
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// The one line printed on stderr for a failed run.
fn error_line(e: &TrendingError) -> String {
    format!("Error: {}", e)
}

async fn run(args: &Args) -> Result<String, TrendingError> {
    let config = args.to_config()?;
    debug!(
        "Looking back {} ({} days), limit {}",
        config.window(),
        config.window_in_days(),
        config.limit()
    );

    let searcher = GitHubSearcher::new()?;

    let pb = spinner(
        args.no_progress,
        &format!("Searching repositories created this {}", config.window()),
    );
    let result = searcher.fetch_trending(&config).await;
    pb.finish_and_clear();

    Ok(format_repositories(&result?))
}

/// Spinner on stderr; indicatif keeps it hidden when stderr is not a terminal.
fn spinner(disabled: bool, message: &str) -> ProgressBar {
    if disabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
    {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
