use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::domain::{PostbackTarget, ScrapeError};

use super::{
    form_extractor::{current_form, SubmittableForm},
    session::{Page, ScrapeSession},
};

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

pub enum PageTransition {
    Next(Page),
    EndOfPagination,
}

pub fn find_page_link(document: &Html, pageno: u32) -> Option<PostbackTarget> {
    document
        .select(&LINK_SELECTOR)
        .filter_map(|a| a.attr("href"))
        .filter_map(|href| href.parse::<PostbackTarget>().ok())
        .find(|target| target.is_page(pageno))
}

/// `Ok(None)` means there is no `pageno` link and paging is over.
pub fn prepare_page_request(
    page: &Page,
    pageno: u32,
) -> Result<Option<SubmittableForm>, ScrapeError> {
    let document = Html::parse_document(&page.html);

    let Some(link) = find_page_link(&document, pageno) else {
        return Ok(None);
    };

    let mut form = current_form(&document, &page.url)
        .map_err(ScrapeError::parse(pageno.saturating_sub(1)))?;
    log::debug!("Following pager link {}", link);
    form.state.apply_postback(link);

    Ok(Some(form))
}

/// Emulates the `__doPostBack()` a click on the `pageno` pager link triggers.
pub async fn goto_page(
    session: &ScrapeSession,
    page: &Page,
    pageno: u32,
) -> Result<PageTransition, ScrapeError> {
    let Some(form) = prepare_page_request(page, pageno)? else {
        return Ok(PageTransition::EndOfPagination);
    };

    log::info!("Getting page {}", pageno);

    let next = session.submit(&form.action, &form.state).await?;
    Ok(PageTransition::Next(next))
}
