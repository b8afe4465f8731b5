//! # PureMVC Demo Entry Point
//!
//! Starts a counter core, sends a few notifications through it, then tears
//! the core down again.

use anyhow::{bail, Result};
use puremvc::cmd_args::CommandLineArgs;
use puremvc::config;
use puremvc::demo::DemoApp;
use puremvc::CoreRegistry;
use tracing_subscriber::fmt::time::ChronoLocal;

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    let log_level = args.log_level();
    let Some(level) = config::parse_log_level(&log_level) else {
        bail!("unknown log level '{}'", log_level);
    };
    tracing_subscriber::fmt()
        .with_env_filter(config::build_env_filter(level)?)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    let registry = CoreRegistry::new();
    let app = DemoApp::start(&registry, args.key())?;
    for _ in 0..args.increments() {
        app.increment(1)?;
    }

    let report = app.facade().report();
    app.shutdown()?;

    for line in app.lines() {
        println!("{line}");
    }
    if args.json() {
        println!("{}", report.to_json()?);
    }

    registry.remove_core(args.key());
    tracing::info!("Core '{}' removed: {}", args.key(), !registry.has_core(args.key()));
    Ok(())
}
