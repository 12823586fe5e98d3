//! Line-oriented front end for `chess_rules`.
//!
//! Reads one command per line from stdin and prints the reply to stdout.
//! Logs go to stderr and follow `RUST_LOG`, falling back to the configured
//! `log_level`.

mod config;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use session::{Reply, Session};

fn print_usage() {
    println!("chess_cli: play chess one command per line");
    println!();
    println!("Usage:");
    println!("  chess_cli [--config <path>]");
    println!();
    println!("Type `help` at the prompt for the command list.");
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config needs a path"),
            },
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("unknown argument `{other}`"),
        }
    }
    Ok(config)
}

fn main() -> Result<()> {
    let config_path = parse_args()?;
    let config = CliConfig::resolve(config_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();
    info!(?config, "chess_cli v{} starting", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        match session.execute(&line) {
            Reply::Continue(text) => {
                if !text.is_empty() {
                    writeln!(stdout, "{text}")?;
                }
                stdout.flush()?;
            }
            Reply::Quit => break,
        }
    }
    info!(fen = %session.board().to_fen(), "session ended");
    Ok(())
}
