// src/bin/cli.rs
use frc_scrape::{
    config::AppOptions,
    core::HttpFetcher,
    logging,
    progress::ConsoleProgress,
    runner,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    let opts = AppOptions::default();
    let fetcher = HttpFetcher::new(&opts.net)?;

    let summary = runner::run(&opts, &fetcher, &mut ConsoleProgress)?;
    println!(
        "Wrote {} rows from {} events to {}",
        summary.rows,
        summary.events,
        summary.path.display()
    );
    Ok(())
}
