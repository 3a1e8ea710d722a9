use dotenv::dotenv;
use immutable_extensions::{
    config::{Config, global_config},
    tally::Tally,
    telemetry::setup_logger,
};
use std::io::{self, Write};
use tracing::info;

fn main() -> color_eyre::Result<()> {
    dotenv().ok();
    color_eyre::install()?;

    Config::from_env().init()?;
    let config = global_config();
    setup_logger(&config)?;
    info!(strict = config.strict, "reading values from stdin");

    let tally = Tally::read_from(io::stdin().lock(), config.strict)?;

    let mut out = io::stdout().lock();
    for (value, count) in tally.entries() {
        writeln!(out, "{value}\t{count}")?;
    }
    info!(skipped = tally.skipped(), "done");

    Ok(())
}
