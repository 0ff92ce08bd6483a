use std::path::Path;

use chrono::NaiveDate;
use clap::Args;
use daygrid_core::{CalendarSource, Canvas, DayLayout, TextCanvas};

use super::{Format, SourceArgs};

#[derive(Args)]
pub struct LayoutArgs {
    /// Day to lay out (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: LayoutArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (_, engine, source) = args.source.resolve(config_path)?;
    let events = source.events_for_day(args.date)?;
    let layout = engine.layout_day(&events);

    match args.source.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&layout)?),
        Format::Table => print!("{}", table(&layout)),
        Format::Text => {
            let mut canvas = TextCanvas::default();
            canvas.draw_day(args.date, &layout);
            print!("{}", canvas.as_str());
        }
    }
    Ok(())
}

/// One line per placed event: id, column/count, then the rect.
pub fn table(layout: &DayLayout) -> String {
    let mut out = format!(
        "{:<20} {:>7} {:>9} {:>9} {:>9} {:>9}\n",
        "id", "column", "x", "y", "width", "height"
    );
    for p in &layout.placed {
        out.push_str(&format!(
            "{:<20} {:>7} {:>9.1} {:>9.1} {:>9.1} {:>9.1}\n",
            p.placed.event.id,
            format!("{}/{}", p.placed.column, p.placed.column_count),
            p.rect.x,
            p.rect.y,
            p.rect.width,
            p.rect.height
        ));
    }
    for e in &layout.forwarded {
        out.push_str(&format!("{:<20} all-day/multi-day\n", e.id));
    }
    for r in &layout.rejected {
        out.push_str(&format!("{:<20} rejected: {}\n", r.event.id, r.error));
    }
    out
}
