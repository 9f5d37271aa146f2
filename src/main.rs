use std::time::Instant;

use anyhow::Context;
use snapbatch::{
    events, report, ApiRenderer, BatchFetcher, DirStore, FetchConfig, Manifest, StdThrottle,
};

fn main() -> anyhow::Result<()> {
    let config = FetchConfig::default();

    let store = DirStore::create(&config.output_dir).with_context(|| {
        format!("opening output directory {}", config.output_dir.display())
    })?;
    if store.was_created() {
        println!("Created directory: {}", store.dir().display());
    }

    let renderer = ApiRenderer::new(&config).context("building the render client")?;
    let throttle = StdThrottle::from_config(&config);
    let mut fetcher = BatchFetcher::new(&config, renderer, store, throttle)?;

    let events = events::builtin_events();
    println!("\nStarting download of {} screenshots...\n", events.len());

    let start = Instant::now();
    let results = fetcher.run(&events);

    report::print_summary(&results, start.elapsed(), &config.output_dir);

    let manifest = Manifest::from_results(&results);
    let path = manifest
        .write(&config.output_dir)
        .context("writing manifest")?;
    println!("Manifest saved to: {}", path.display());

    Ok(())
}
