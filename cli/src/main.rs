mod board;
mod client;
mod config;
mod dashboard;
mod logging;
mod view;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use common::{Draft, RequestId};
use std::path::PathBuf;
use tokio::io::BufReader;

use board::RequestBoard;
use client::HttpApi;
use config::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the requests API (e.g. http://localhost:8000/api)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file (.yaml, .yml or .toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (default)
    Dashboard,
    /// Show all requests
    List,
    /// Show request counts per status
    Summary,
    /// Create a new request
    Add {
        /// Customer name
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        name: String,
        /// Request details
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        details: String,
    },
    /// Move a request to its next status
    Advance {
        id: RequestId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.api_url, cli.log_level);
    logging::setup_logging(&config.logging)?;
    let api = HttpApi::new(&config.api.base_url);
    log::debug!("Using API at {}", api.base_url());
    let mut board = RequestBoard::new(api);

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            dashboard::run(&mut board, stdin, &mut stdout).await?;
        }
        Commands::List => {
            board.load().await;
            print!("{}", view::render_board(&board));
        }
        Commands::Summary => {
            board.load().await;
            println!("{}", view::render_summary(&board.summary()));
        }
        Commands::Add { name, details } => {
            board.load().await;
            board.submit_draft(Draft::new(name, details)).await?;
            print!("{}", view::render_board(&board));
        }
        Commands::Advance { id } => {
            board.load().await;
            let next = board.find(id).map(|r| r.status.next());
            match next {
                Some(Some(next)) => board.advance(id, next).await,
                Some(None) => eprintln!("Request {} is already completed.", id),
                None => eprintln!("Request {} not found.", id),
            }
            print!("{}", view::render_board(&board));
        }
    }

    Ok(())
}
