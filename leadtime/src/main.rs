use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use leadtime::cli::Args;
use leadtime::leadtime::compute_deadline;
use leadtime::report::render_text;
use leadtime::time::Date;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let today = match args.today {
        Some(today) => today,
        None => Date::try_from(chrono::Local::now().date_naive())
            .context("system date is outside the supported range")?,
    };
    let request = args.request();
    let calendar = args.calendar.calendar();

    let result = compute_deadline(&request, today, calendar).with_context(|| {
        format!(
            "cannot compute an application deadline for {}",
            request.target_date
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_text(&result, calendar.name()));
    }
    Ok(())
}
