use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "github-commit-counter")]
#[command(about = "Reports the number of commits in each of a GitHub user's repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List a user's repositories with a commit count for each
    Commits {
        /// GitHub user whose repositories are counted
        user: String,

        /// API token for authenticated requests (higher rate limits)
        #[arg(long, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },

    /// Classify a triangle from its three side lengths (c is the hypotenuse)
    Triangle {
        /// Length of side a
        a: f64,

        /// Length of side b
        b: f64,

        /// Length of side c
        c: f64,
    },
}
