use crate::{
    configuration::Settings,
    domain::{ResultSet, ScrapeError},
    services::{save_cases, CaseScraper, ScrapeSession},
};

/// Scrapes the register and writes the CSV, but only after every page has
/// been fetched and parsed.
pub async fn run(settings: &Settings) -> Result<ResultSet, ScrapeError> {
    let session = ScrapeSession::new(&settings.scraper)?;
    let scraper = CaseScraper::new(session, settings.scraper.address.clone());

    let results = scraper.scrape().await?;
    save_cases(&settings.output.path, results.cases())?;

    Ok(results)
}
