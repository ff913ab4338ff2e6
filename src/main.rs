use anyhow::Result;
use clap::Parser;

use mls_scraper::cli::{init_logging, Args, ConsoleView};
use mls_scraper::scraping::ScrapeEngine;

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let view = ConsoleView::new();
    view.initialization(&args);

    // existence checks belong to the shim; the engine assumes readable paths
    if !args.input.exists() {
        view.missing_path(&args.input);
        std::process::exit(1);
    }
    if !args.output.is_dir() {
        view.missing_path(&args.output);
        std::process::exit(1);
    }

    let mut engine = ScrapeEngine::new()?;

    view.reading(&args.input);
    if let Err(err) = engine.load(&args.input) {
        view.load_failed(&err);
        return Err(err.into());
    }
    view.loaded();

    view.scraping();
    let status = engine.extract_all()?.clone();
    view.scraped();
    view.summary(&status);

    view.writing(&args.output);
    if let Err(err) = engine.export(Some(&args.output), args.as_tabular()) {
        view.write_failed(&err);
        return Err(err.into());
    }
    view.written();

    view.ending();
    Ok(())
}
