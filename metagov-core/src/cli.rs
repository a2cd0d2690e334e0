use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "metagov")]
#[command(about = "Resolve metagovernance proposal statuses and countdowns")]
pub struct Cli {
    /// Also write logs to this file.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every proposal in a board file
    Board(BoardArgs),
    /// Resolve a single proposal
    Status {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long)]
        id: u64,
    },
    /// Write the default configuration
    InitConfig {
        #[arg(short, long, value_name = "OUT", default_value = "metagov.json")]
        out: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Board JSON: current block, proposals, votes and auxiliary records
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the wall-clock time of the current block (RFC 3339)
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Installs the stderr subscriber, plus a file layer when `log_file` is set.
///
/// The returned guard must be kept alive until exit so buffered file output
/// is flushed.
pub fn init_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,metagov=debug".into()),
        );

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "metagov.log".into());
            let appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_command() {
        let cli = Cli::parse_from([
            "metagov",
            "board",
            "--input",
            "board.json",
            "--now",
            "2024-06-01T12:00:00Z",
        ]);
        match cli.command {
            Commands::Board(args) => {
                assert_eq!(args.input, PathBuf::from("board.json"));
                assert!(args.config.is_none());
                assert_eq!(args.now.map(|t| t.timestamp()), Some(1_717_243_200));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_command() {
        let cli = Cli::parse_from([
            "metagov",
            "--log-file",
            "out.log",
            "status",
            "-i",
            "b.json",
            "-c",
            "cfg.json",
            "--id",
            "42",
        ]);
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        match cli.command {
            Commands::Status { board, id } => {
                assert_eq!(id, 42);
                assert_eq!(board.config, Some(PathBuf::from("cfg.json")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
