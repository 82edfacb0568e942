use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use jcrsh::logging::{self, LogTarget};
use jcrsh::model::{ClientConfig, ConfigOverrides, Session};
use jcrsh::remote::RemoteClient;

use crate::Commands;

#[derive(Parser)]
#[command(name = "jcrsh")]
#[command(about = "Shell client for a remote content repository", long_about = None)]
pub(crate) struct Cli {
    /// REST root of the shell service (e.g. http://localhost:8080/jcr-shell/rest)
    #[arg(long = "url", global = true, value_name = "URL")]
    url: Option<String>,

    /// Repository path to start in
    #[arg(long = "path", global = true, value_name = "PATH")]
    path: Option<String>,

    /// Write diagnostics to this file
    #[arg(long = "log-file", global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Config file (defaults to ~/.jcrsh/config.json)
    #[arg(long = "config", global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        config: cli.config,
        base_url: cli.url,
        start_path: cli.path,
        log_file: cli.log_file,
    };
    let cfg = ClientConfig::load(&overrides)?;
    let client = RemoteClient::new(cfg.require_base_url()?)?;
    let session = Session::new(cfg.start_path());

    let interactive = cli.command.is_none();
    logging::init(LogTarget::for_mode(cfg.log_file.as_deref(), interactive))?;
    tracing::debug!(base_url = client.base_url(), path = session.current_path(), "configured");

    match cli.command {
        None => jcrsh::tui::run(jcrsh::tui::TuiRunOptions { client, session }),
        Some(command) => crate::cli_exec::handle_command(command, client, session),
    }
}
