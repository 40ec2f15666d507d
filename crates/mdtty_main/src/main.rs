use std::panic;

use clap::Parser;
use colored::Colorize;
use mdtty_main::{Cli, init_tracing, run};

#[tokio::main]
async fn main() {
    // Set up panic hook for better error display
    panic::set_hook(Box::new(|panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unexpected error occurred".to_string()
        };

        eprintln!("{} {}", "ERROR".red().bold(), message);
        std::process::exit(1);
    }));

    #[cfg(windows)]
    let _ = enable_ansi_support::enable_ansi_support();

    let cli = Cli::parse();
    let guard = init_tracing();
    let result = run(cli).await;

    if let Err(error) = &result {
        tracing::error!(error = format!("{error:#}"), "mdtty failed");
    }
    // `process::exit` skips destructors, so flush the log writer first.
    drop(guard);

    match result {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("{} {:#}", "ERROR".red().bold(), error);
            std::process::exit(1);
        }
    }
}
