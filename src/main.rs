#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use trailcursor::{
    infrastructure::{
        capability::TerminalCapability, cli::Cli, config::Config,
        frame_scheduler::IntervalScheduler, tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), then apply command line overrides
    let mut config = Config::new()?;
    args.apply(&mut config);

    let capability = TerminalCapability::detect(config.hover);
    let mut scheduler = IntervalScheduler::new(args.frame_rate);

    let tui = Arc::new(Mutex::new(RealTui::new()?.tick_rate(args.tick_rate)));
    let mut runner = AppRunner::new(config, tui, &capability, &mut scheduler).await?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
