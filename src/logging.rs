use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_DIRECTIVE: &str = "jcrsh=info";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// The interactive shell owns the terminal, so it always logs to a file.
    pub fn for_mode(log_file: Option<&Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::File(std::env::temp_dir().join("jcrsh.log")),
            None => Self::Stderr,
        }
    }
}

pub fn init(target: LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let registry = tracing_subscriber::registry().with(filter);

    let res = match target {
        LogTarget::Stderr => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    };
    res.map_err(|err| anyhow::anyhow!("install log subscriber: {}", err))
}
