use std::io::{IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

use jcrsh::console::ConsoleRenderer;
use jcrsh::model::Session;
use jcrsh::remote::RemoteClient;

use crate::Commands;

const DEFAULT_WIDTH: usize = 80;

pub(crate) fn handle_command(
    command: Commands,
    client: RemoteClient,
    session: Session,
) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("create tokio runtime")?;
    let mut console = stdout_console();

    match command {
        Commands::Exec { command } => {
            let line = command.join(" ");
            let execution = rt.block_on(client.execute(&session, &line))?;
            console.present(&line, &execution)?;
        }
        Commands::Run { script } => {
            let lines = read_script(&script)?;
            let ok = rt.block_on(run_script(&client, session, &lines, &mut console))?;
            if !ok {
                anyhow::bail!("script {} stopped early", script.display());
            }
        }
    }
    Ok(())
}

/// Runs `lines` in order, threading the session path between them.
///
/// Returns `false` when a line could not be executed; later lines are skipped.
pub(crate) async fn run_script<W: Write>(
    client: &RemoteClient,
    mut session: Session,
    lines: &[String],
    console: &mut ConsoleRenderer<W>,
) -> Result<bool> {
    for line in lines {
        console.println(&format!("Executing: {}", line))?;
        match client.execute(&session, line).await {
            Ok(execution) => {
                console.present(line, &execution)?;
                session = execution.session;
            }
            Err(err) => {
                tracing::warn!(command = %line, error = %format!("{:#}", err), "execution failed");
                console.println("Command failed, exiting..")?;
                return Ok(false);
            }
        }
    }
    console.println("Finished.")?;
    Ok(true)
}

/// Non-blank lines that are not `#` comments, trimmed.
pub(crate) fn script_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn read_script(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read script {}", path.display()))?;
    Ok(script_lines(&text))
}

fn stdout_console() -> ConsoleRenderer<std::io::Stdout> {
    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let width = crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH);
    ConsoleRenderer::new(stdout, width, color)
}

#[cfg(test)]
#[path = "tests/cli_exec_tests.rs"]
mod tests;
