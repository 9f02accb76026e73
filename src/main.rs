use anyhow::Context;
use clap::Parser;
use insyn::{cli::Cli, configuration::get_configuration, startup::run, telemetry::init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let settings = cli.apply(configuration);

    let results = run(&settings).await.with_context(|| {
        format!(
            "Scrape for address {:?} failed, no output written",
            settings.scraper.address
        )
    })?;

    log::info!(
        "Done: {} cases saved to {}",
        results.len(),
        settings.output.path.display()
    );
    Ok(())
}
