//! Print the playback script of a timer.
//!
//! Reads a stored timer document from the path given as the first argument,
//! or builds one from the Tabata template when no path is given. Optional
//! editor settings can be passed as a YAML file in the second argument.
//!
//! ```text
//! RUST_LOG=debug cargo run --example playback_script -- timer.json settings.yaml
//! ```

use anyhow::{Context, Result};
use interval_timer::{EditorSettings, Template, TimerEditor, format_time};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let timer_path = args.next();
    let settings = match args.next() {
        Some(path) => EditorSettings::from_path(&path)
            .with_context(|| format!("loading settings from {}", path))?,
        None => EditorSettings::default(),
    };

    let editor = match timer_path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading timer from {}", path))?;
            TimerEditor::load(&json, settings)?
        }
        None => {
            let mut editor = TimerEditor::new(settings);
            editor.insert_template(Template::Tabata);
            editor
        }
    };

    let workout = editor.flatten();
    for interval in &workout {
        let round = interval
            .round
            .map(|r| format!("{}/{}", r.current, r.total))
            .unwrap_or_default();
        println!(
            "{:>4}  {}  {:<8} {:<20} {:>5}  {}",
            interval.position,
            format_time(interval.start_offset.try_into().unwrap_or(u32::MAX)),
            interval.kind.as_str(),
            interval.name,
            round,
            format_time(interval.duration),
        );
    }
    println!(
        "{} intervals, total {}",
        workout.len(),
        format_time(workout.total_duration.try_into().unwrap_or(u32::MAX))
    );

    Ok(())
}
