use std::path::Path;

use chrono::NaiveDate;
use clap::Args;
use daygrid_core::{Canvas, TextCanvas};

use super::{layout::table, Format, SourceArgs};

#[derive(Args)]
pub struct WeekArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// Number of days (defaults to week.days from config)
    #[arg(long)]
    pub days: Option<u32>,
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: WeekArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (config, engine, source) = args.source.resolve(config_path)?;
    let days = args.days.unwrap_or(config.week.days);
    if days == 0 {
        return Err("--days must be at least 1".into());
    }
    let week = engine.layout_days(&source, args.start, days)?;

    match args.source.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&week)?),
        Format::Table => {
            for day in &week.days {
                println!("{}", day.date);
                print!("{}", table(&day.layout));
            }
        }
        Format::Text => {
            let mut canvas = TextCanvas::default();
            canvas.draw_week(&week);
            print!("{}", canvas.as_str());
        }
    }
    Ok(())
}
