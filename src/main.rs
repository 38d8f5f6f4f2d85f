use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use boop::cli::{describe_history, describe_session, run_shell};
use boop::config::Config;
use boop::logging::init_tracing;
use boop::reward::HistoryFilter;
use boop::BoopApp;

#[derive(Debug, Parser)]
#[command(name = "boop", version, about = "Scan, share and earn with Boop")]
struct Cli {
    /// Config file (default: platform config dir + boop/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the directory holding the saved session
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the simulated round-trip delay in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read commands from stdin (default)
    Shell,
    /// Show the saved session
    Whoami,
    /// Show the seeded redemption history
    History,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }
    if let Some(ms) = cli.latency_ms {
        config.network.latency_ms = ms;
    }

    let app = BoopApp::from_config(&config);

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            run_shell(&app, stdin, &mut stdout)
                .await
                .context("shell I/O failed")?;
        }
        Command::Whoami => println!("{}", describe_session(&app.session().state())),
        Command::History => println!(
            "{}",
            describe_history(&app.rewards().state(), HistoryFilter::All)
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["boop"]);
        assert!(cli.command.is_none());
        assert!(cli.latency_ms.is_none());
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from(["boop", "--latency-ms", "0", "--data-dir", "/tmp/b", "whoami"]);
        assert_eq!(cli.latency_ms, Some(0));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/b")));
        assert!(matches!(cli.command, Some(Command::Whoami)));
    }
}
