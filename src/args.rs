use clap::Parser;
use std::ffi::OsString;

use crate::config::{Config, ConfigError};

/// Show the most starred GitHub repositories created in a recent time window.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = "Lists the most starred GitHub repositories created within the last day, week, month or year, ranked by stars."
)]
pub struct Args {
    /// Time range to look back over: day, week, month or year.
    #[clap(short, long, default_value = "week", value_name = "WINDOW")]
    pub duration: String,

    /// Number of repositories to display (1-100).
    #[clap(
        short,
        long,
        default_value_t = 10,
        allow_negative_numbers = true,
        value_name = "NUM"
    )]
    pub limit: i64,

    /// Do not draw a spinner while waiting for GitHub.
    #[clap(long)]
    pub no_progress: bool,
}

/// Long flags that may also be written with a single dash.
const SINGLE_DASH_FLAGS: [&str; 2] = ["-duration", "-limit"];

/// Rewrite `-duration`, `-duration=..`, `-limit` and `-limit=..` to their
/// `--` forms so clap does not read them as bundled short flags.
pub fn normalize_flags<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    argv.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(s) if is_single_dash_flag(s) => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    SINGLE_DASH_FLAGS.iter().any(|flag| {
        arg.strip_prefix(flag)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
    })
}

impl Args {
    /// Turn the parsed flags into a validated [`Config`].
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        Config::parse(&self.duration, self.limit)
    }
}
