#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};
use tracing::warn;

/// Current terminal width in columns, if stdout is a terminal.
pub fn terminal_cols() -> Option<usize> {
    terminal_size::terminal_size().map(|(width, _)| width.0 as usize)
}

/// Reports terminal width changes (`SIGWINCH` on unix).
pub struct ResizeWatcher {
    #[cfg(unix)]
    signal: Option<Signal>,
}

impl ResizeWatcher {
    /// Watches for resizes. Falls back to a disabled watcher when the signal
    /// cannot be installed.
    pub fn new() -> Self {
        #[cfg(unix)]
        {
            let signal = signal(SignalKind::window_change())
                .inspect_err(|error| warn!(%error, "Could not watch terminal resizes"))
                .ok();
            Self { signal }
        }
        #[cfg(not(unix))]
        {
            warn!("Terminal resize tracking is not supported on this platform");
            Self {}
        }
    }

    /// A watcher that never fires, for fixed widths.
    pub fn disabled() -> Self {
        Self {
            #[cfg(unix)]
            signal: None,
        }
    }

    /// Waits for the next resize and returns the new width. Pending forever
    /// when disabled.
    pub async fn changed(&mut self) -> Option<usize> {
        #[cfg(unix)]
        if let Some(signal) = self.signal.as_mut() {
            signal.recv().await?;
            return terminal_cols();
        }
        std::future::pending().await
    }
}
