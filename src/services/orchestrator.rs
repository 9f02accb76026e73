use crate::domain::{ResultSet, ScrapeError};

use super::{
    case_table::parse_case_table,
    form_extractor::extract_search_form,
    postback_emulator::{goto_page, PageTransition},
    session::{Page, ScrapeSession},
};

enum ScrapeState {
    Searching,
    Paging { pageno: u32, current: Page },
    Done,
}

pub struct CaseScraper {
    session: ScrapeSession,
    address: String,
}

impl CaseScraper {
    pub fn new(session: ScrapeSession, address: impl Into<String>) -> Self {
        CaseScraper {
            session,
            address: address.into(),
        }
    }

    /// Any error aborts the whole scrape; no partial results are returned.
    pub async fn scrape(self) -> Result<ResultSet, ScrapeError> {
        let mut results = ResultSet::default();
        let mut state = ScrapeState::Searching;

        loop {
            state = match state {
                ScrapeState::Searching => ScrapeState::Paging {
                    pageno: 2,
                    current: self.submit_search().await?,
                },
                ScrapeState::Paging { pageno, current } => {
                    let cases = parse_case_table(&current.html);
                    log::debug!("Found {} cases on page {}", cases.len(), pageno - 1);
                    results.extend_page(cases);

                    match goto_page(&self.session, &current, pageno).await? {
                        PageTransition::Next(next) => ScrapeState::Paging {
                            pageno: pageno + 1,
                            current: next,
                        },
                        PageTransition::EndOfPagination => ScrapeState::Done,
                    }
                }
                ScrapeState::Done => break,
            };
        }

        log::info!(
            "Scraped {} cases from {} pages",
            results.len(),
            results.pages()
        );
        Ok(results)
    }

    async fn submit_search(&self) -> Result<Page, ScrapeError> {
        log::info!("Submitting search for address {}", self.address);

        let search_page = self.session.fetch_search_page().await?;
        let form =
            extract_search_form(&search_page, &self.address).map_err(ScrapeError::parse(0))?;

        self.session.submit(&form.action, &form.state).await
    }
}
