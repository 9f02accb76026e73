use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::configuration::Settings;

/// Scrape building-permit cases for an address into a CSV file.
#[derive(Parser, Debug, Default)]
#[command(name = "insyn", version)]
pub struct Cli {
    /// Address to search for (overrides `scraper.address`)
    #[arg(short, long)]
    pub address: Option<String>,

    /// CSV file to write (overrides `output.path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Register search page (overrides `scraper.base_url`)
    #[arg(long)]
    pub base_url: Option<Url>,
}

impl Cli {
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(address) = self.address {
            settings.scraper.address = address;
        }
        if let Some(path) = self.output {
            settings.output.path = path;
        }
        if let Some(base_url) = self.base_url {
            settings.scraper.base_url = base_url;
        }
        settings
    }
}
