mod cli;

use clap::Parser;
use cli::{Cli, Command};
use colored::*;
use github_commit_counter::github::GitHubClient;
use github_commit_counter::http::ReqwestGet;
use github_commit_counter::triangle::classify_triangle;
use github_commit_counter::types::format_repo_commit_counts;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Commits { user, token, timeout } => {
            println!("{}", "GitHub Commit Counter".bold().green());
            println!("{}\n", "=".repeat(50).dimmed());

            let transport = ReqwestGet::new(token, Duration::from_secs(timeout))?;
            let client = GitHubClient::new(transport);

            match client.get_repo_commit_counts(&user).await {
                Ok(results) if results.is_empty() => {
                    println!("No repositories found for user {}", user.bold());
                }
                Ok(results) => {
                    println!("{}", format_repo_commit_counts(&results));
                }
                Err(e) => {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    std::process::exit(1);
                }
            }
        }
        Command::Triangle { a, b, c } => match classify_triangle(a, b, c) {
            Ok(classification) => println!("{}", classification),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
