pub mod config;
pub mod layout;
pub mod week;

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use daygrid_core::{Config, JsonFileSource, LayoutEngine};

/// Output format for layout commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Table,
    Text,
}

/// Options shared by `layout` and `week`.
#[derive(Args)]
pub struct SourceArgs {
    /// JSON calendar file (defaults to source.events_file from config)
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// Day column height in pixels
    #[arg(long)]
    pub height: Option<f64>,
    /// Day column width in pixels
    #[arg(long)]
    pub width: Option<f64>,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

impl SourceArgs {
    /// Load config, apply overrides and open the calendar file.
    pub fn resolve(
        &self,
        config_path: Option<&Path>,
    ) -> Result<(Config, LayoutEngine, JsonFileSource), Box<dyn std::error::Error>> {
        let mut config = Config::load_or_default(config_path);
        if let Some(height) = self.height {
            config.layout.day_height_px = height;
        }
        if let Some(width) = self.width {
            config.layout.day_width_px = width;
        }
        let engine = LayoutEngine::from_config(&config.layout)?;

        let path = self
            .events
            .clone()
            .or_else(|| config.source.events_file.clone())
            .ok_or("no events file: pass --events or set source.events_file")?;
        let source = JsonFileSource::open(path)?;
        Ok((config, engine, source))
    }
}
