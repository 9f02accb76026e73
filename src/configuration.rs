use std::path::{Path, PathBuf};

use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub output: OutputSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ScraperSettings {
    pub base_url: Url,
    pub address: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_delay_ms: u64,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct OutputSettings {
    pub path: PathBuf,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    load_configuration(&base_path.join("configuration"))
}

/// Defaults, then `<dir>/base.yaml` if present, then `APP_*` environment
/// variables (e.g. `APP_SCRAPER__ADDRESS`).
pub fn load_configuration(configuration_directory: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default(
            "scraper.base_url",
            "http://insynsbk.stockholm.se/Byggochplantjansten/Arenden/",
        )?
        .set_default("scraper.address", "Fleminggatan 4")?
        .set_default("scraper.timeout_secs", 30)?
        .set_default("scraper.request_delay_ms", 0)?
        .set_default("output.path", "results.csv")?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
