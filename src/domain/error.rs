use thiserror::Error;

/// The register's markup did not have the shape the scraper expects.
///
/// Each variant names the extraction step that failed so a change in the
/// site's markup can be located from the log line alone.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("form `#{0}` not found on page")]
    FormNotFound(&'static str),

    #[error("no <select> dropdown inside the search form")]
    DropdownNotFound,

    #[error("search form dropdown has no name attribute")]
    DropdownUnnamed,

    #[error("dropdown `{0}` has no pre-selected option")]
    NoSelectedOption(String),

    #[error("no input whose name ends with `{0}` in the search form")]
    AddressFieldNotFound(&'static str),

    #[error("href is not a __doPostBack call: {0}")]
    MalformedPostback(String),

    #[error("form action `{action}` cannot be resolved: {source}")]
    InvalidAction {
        action: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Page 0 is the empty search page, page 1 the first page of results.
    #[error("failed to parse page {page}: {source}")]
    Parse {
        page: u32,
        #[source]
        source: ParseError,
    },

    #[error("request to the register failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to write results: {0}")]
    Output(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn parse(page: u32) -> impl FnOnce(ParseError) -> ScrapeError {
        move |source| ScrapeError::Parse { page, source }
    }
}
