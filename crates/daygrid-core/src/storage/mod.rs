mod config;

pub use config::{Config, LayoutConfig, SourceConfig, WeekConfig};

use std::path::PathBuf;

/// Returns `~/.config/daygrid[-dev]/` based on DAYGRID_ENV.
///
/// Set DAYGRID_ENV=dev to use the development config directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYGRID_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("daygrid-dev")
    } else {
        base_dir.join("daygrid")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
