use std::path::PathBuf;

use clap::Parser;
use mdtty_config::MdttyConfig;
use mdtty_markdown_stream::StreamMode;

/// Render markdown blocks in a program's output as styled terminal text.
///
/// Runs COMMAND and renders its standard output, or renders standard input
/// when no command is given: `mdtty -- cargo doc --help` or
/// `llm "explain" | mdtty`.
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"), name = "mdtty")]
pub struct Cli {
    /// Rendering mode: off, ansi or overlay.
    #[arg(long, short = 'm')]
    pub mode: Option<StreamMode>,

    /// Render width in columns instead of following the terminal.
    #[arg(long, short = 'w', value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Hide the language tag on code blocks.
    #[arg(long, default_value_t = false)]
    pub no_language: bool,

    /// Path to a TOML config file. Defaults to the platform config directory.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Command to run, with its arguments.
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(&self, mut config: MdttyConfig) -> MdttyConfig {
        if let Some(mode) = self.mode {
            config = config.mode(mode);
        }
        if let Some(width) = self.width {
            config = config.width(usize::from(width));
        }
        if self.no_language {
            config = config.show_language(false);
        }
        config
    }
}
