mod cli;
mod decode;
mod logging;
mod pipeline;
mod resize;

use std::process::Stdio;

use anyhow::{Context, Result};
pub use cli::Cli;
pub use logging::init_tracing;
use mdtty_config::MdttyConfig;
use mdtty_markdown_stream::StreamAdapter;
pub use pipeline::Pipeline;
pub use resize::{ResizeWatcher, terminal_cols};
use tokio::process::Command;
use tracing::{debug, info};

/// Runs mdtty and returns the exit code to report.
///
/// With a command, the command's stdout is rendered and its exit code is
/// returned. Otherwise stdin is rendered and the result is 0.
pub async fn run(cli: Cli) -> Result<i32> {
    let config = cli.apply(MdttyConfig::load(cli.config.as_deref())?);
    debug!(?config, "Resolved configuration");

    let adapter = StreamAdapter::new(config.mode)
        .with_detector(config.detector())
        .with_options(config.render_options(terminal_cols()));
    let mut pipeline = Pipeline::new(adapter);
    let mut resize = if config.follows_terminal() {
        ResizeWatcher::new()
    } else {
        ResizeWatcher::disabled()
    };

    let Some((program, args)) = cli.command.split_first() else {
        info!(mode = %config.mode, "Rendering standard input");
        pipeline
            .pump(tokio::io::stdin(), tokio::io::stdout(), &mut resize)
            .await?;
        return Ok(0);
    };

    info!(mode = %config.mode, program = program.as_str(), "Starting command");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("Failed to start '{program}'"))?;
    let stdout = child
        .stdout
        .take()
        .context("Command output was not captured")?;

    pipeline
        .pump(stdout, tokio::io::stdout(), &mut resize)
        .await?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed to wait for '{program}'"))?;
    info!(%status, "Command exited");
    Ok(status.code().unwrap_or(1))
}
