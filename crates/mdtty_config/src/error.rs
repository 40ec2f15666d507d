use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid width {0}: the terminal width must be at least one column")]
    InvalidWidth(usize),

    #[error("Invalid max_fence_bytes {0}: the code fence limit must be positive")]
    InvalidFenceLimit(usize),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
