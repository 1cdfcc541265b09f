use anyhow::Result;
use clap::Parser;
use cmdbar::{Cli, Config, InMemoryRegistry, InteractiveApp, logging};
use std::sync::Arc;

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    // Initialize tracing
    logging::init_tracing(&config.log_file, config.verbose)?;
    tracing::info!(?config, "starting");

    let subjects = match &config.subjects_file {
        Some(path) => InMemoryRegistry::load_subjects(path)?,
        None => InMemoryRegistry::demo_subjects(),
    };
    let registry = InMemoryRegistry::new(config.registry_latency)
        .with_failing_deletes(config.fail_deletes)
        .with_subjects(subjects);

    let mut app = InteractiveApp::new(config.timings, Arc::new(registry));
    app.run()
}
