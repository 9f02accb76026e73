use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{
    configuration::ScraperSettings,
    domain::{FormState, ScrapeError},
};

#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub html: String,
}

/// Cookie jar and base URL for one scrape. Not shared, not persisted.
pub struct ScrapeSession {
    client: Client,
    base_url: Url,
    request_delay: Duration,
}

impl ScrapeSession {
    pub fn new(settings: &ScraperSettings) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(ScrapeSession {
            client,
            base_url: settings.base_url.clone(),
            request_delay: Duration::from_millis(settings.request_delay_ms),
        })
    }

    pub async fn fetch_search_page(&self) -> Result<Page, ScrapeError> {
        log::debug!("GET {}", self.base_url);

        let res = self
            .client
            .get(self.base_url.clone())
            .send()
            .await?
            .error_for_status()?;

        Self::into_page(res).await
    }

    pub async fn submit(&self, action: &Url, form: &FormState) -> Result<Page, ScrapeError> {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        log::debug!("POST {} with {} fields", action, form.len());

        let res = self
            .client
            .post(action.clone())
            .form(&form.to_form_pairs())
            .send()
            .await?
            .error_for_status()?;

        Self::into_page(res).await
    }

    async fn into_page(res: reqwest::Response) -> Result<Page, ScrapeError> {
        let url = res.url().clone();
        let html = res.text().await?;

        Ok(Page { url, html })
    }
}
