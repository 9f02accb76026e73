use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::{FormState, ParseError};

use super::session::Page;

pub const SEARCH_FORM_ID: &str = "aspnetForm";
const SEARCH_BUTTON_SUFFIX: &str = "SearchButton";
const ADDRESS_INPUT_SUFFIX: &str = "AddressInput";
// The server renders these unchecked even though the browser shows them checked
const FILTER_CHECKBOX_SUFFIXES: [&str; 2] = [
    "SearchCase_CurrentCasesCheck",
    "SearchCase_ArchivedCasesCheck",
];

static FORM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&format!("form#{}", SEARCH_FORM_ID)).unwrap());
static NAMED_INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input[name]").unwrap());
static SELECT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("select").unwrap());
static OPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("option").unwrap());

#[derive(Debug, Clone)]
pub struct SubmittableForm {
    pub action: Url,
    pub state: FormState,
}

pub fn extract_search_form(page: &Page, address: &str) -> Result<SubmittableForm, ParseError> {
    let document = Html::parse_document(&page.html);
    let form = locate_form(&document)?;

    let mut state = FormState::default();

    for input in form.select(&NAMED_INPUT_SELECTOR) {
        let Some(name) = input.attr("name") else {
            continue;
        };
        let input_type = input.attr("type").unwrap_or("text").to_ascii_lowercase();

        match input_type.as_str() {
            // Only the search button is "clicked", never the clear button
            "submit" if !name.ends_with(SEARCH_BUTTON_SUFFIX) => continue,
            "checkbox" => {
                if is_case_filter(input) {
                    state.set(name, Some("on".to_string()));
                }
            }
            _ => state.set(name, input.attr("value").map(str::to_string)),
        }
    }

    let (select_name, selected) = preselected_option(form)?;
    state.set(select_name, Some(selected));

    state.clear_postback();

    let address_field = state
        .find_name_ending_with(ADDRESS_INPUT_SUFFIX)
        .ok_or(ParseError::AddressFieldNotFound(ADDRESS_INPUT_SUFFIX))?;
    state.set(address_field, Some(address.to_string()));

    Ok(SubmittableForm {
        action: resolve_action(form, &page.url)?,
        state,
    })
}

// Every named input as rendered, no special cases. Enough to replay a postback.
pub fn current_form(
    document: &Html,
    page_url: &Url,
) -> Result<SubmittableForm, ParseError> {
    let form = locate_form(document)?;

    let mut state = FormState::default();
    for input in form.select(&NAMED_INPUT_SELECTOR) {
        if let Some(name) = input.attr("name") {
            state.set(name, input.attr("value").map(str::to_string));
        }
    }

    Ok(SubmittableForm {
        action: resolve_action(form, page_url)?,
        state,
    })
}

fn locate_form(document: &Html) -> Result<ElementRef<'_>, ParseError> {
    document
        .select(&FORM_SELECTOR)
        .next()
        .ok_or(ParseError::FormNotFound(SEARCH_FORM_ID))
}

// Only the two case filters are sent, always ticked
fn is_case_filter(input: ElementRef<'_>) -> bool {
    let id = input.attr("id").unwrap_or_default();
    FILTER_CHECKBOX_SUFFIXES
        .iter()
        .any(|suffix| id.ends_with(suffix))
}

fn preselected_option(form: ElementRef<'_>) -> Result<(String, String), ParseError> {
    let select = form
        .select(&SELECT_SELECTOR)
        .next()
        .ok_or(ParseError::DropdownNotFound)?;
    let name = select.attr("name").ok_or(ParseError::DropdownUnnamed)?;

    let option = select
        .select(&OPTION_SELECTOR)
        .find(|option| option.attr("selected").is_some())
        .ok_or_else(|| ParseError::NoSelectedOption(name.to_string()))?;

    let value = match option.attr("value") {
        Some(value) => value.to_string(),
        None => option.text().collect::<String>().trim().to_string(),
    };

    Ok((name.to_string(), value))
}

fn resolve_action(form: ElementRef<'_>, page_url: &Url) -> Result<Url, ParseError> {
    match form.attr("action") {
        Some(action) => page_url
            .join(action)
            .map_err(|source| ParseError::InvalidAction {
                action: action.to_string(),
                source,
            }),
        None => Ok(page_url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EVENT_ARGUMENT, EVENT_TARGET};

    const SEARCH_PAGE: &str = r#"
        <html><body>
        <form name="aspnetForm" method="post" action="./Default.aspx?tab=1" id="aspnetForm">
            <input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="dDwtMTA4" />
            <input type="hidden" name="__EVENTVALIDATION" value="" />
            <input name="ctl00$Main$SearchCase$AddressInput" type="text" value="old value" />
            <input name="ctl00$Main$SearchCase$ReferenceInput" type="text" />
            <input name="ctl00$Main$SearchCase$CurrentCasesCheck" id="ctl00_Main_SearchCase_CurrentCasesCheck" type="checkbox" />
            <input name="ctl00$Main$SearchCase$ArchivedCasesCheck" id="ctl00_Main_SearchCase_ArchivedCasesCheck" type="checkbox" />
            <input name="ctl00$Main$SearchCase$OtherCheck" id="ctl00_Main_SearchCase_OtherCheck" type="checkbox" />
            <input name="ctl00$Main$SearchCase$CheckedCheck" id="ctl00_Main_SearchCase_CheckedCheck" type="checkbox" checked="checked" value="yes" />
            <select name="ctl00$Main$SearchCase$BoroughSelect">
                <option value="">Alla</option>
                <option selected="selected" value="0">Hela staden</option>
                <option value="3">Kungsholmen</option>
            </select>
            <input type="submit" name="ctl00$Main$SearchCase$SearchButton" value="Sök" />
            <input type="submit" name="ctl00$Main$SearchCase$ClearButton" value="Rensa" />
        </form>
        </body></html>"#;

    fn page(html: &str) -> Page {
        Page {
            url: Url::parse("http://register.test/Arenden/").unwrap(),
            html: html.to_string(),
        }
    }

    #[test]
    fn search_form_overwrites_address() {
        let form = extract_search_form(&page(SEARCH_PAGE), "Fleminggatan 4").unwrap();

        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$AddressInput"),
            Some(Some("Fleminggatan 4"))
        );
    }

    #[test]
    fn search_form_forces_filter_checkboxes_on() {
        let form = extract_search_form(&page(SEARCH_PAGE), "x").unwrap();

        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$CurrentCasesCheck"),
            Some(Some("on"))
        );
        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$ArchivedCasesCheck"),
            Some(Some("on"))
        );
        assert_eq!(form.state.get("ctl00$Main$SearchCase$OtherCheck"), None);
    }

    #[test]
    fn search_form_omits_other_checkboxes_even_when_checked() {
        let form = extract_search_form(&page(SEARCH_PAGE), "x").unwrap();

        assert_eq!(form.state.get("ctl00$Main$SearchCase$CheckedCheck"), None);
    }

    #[test]
    fn search_form_keeps_only_search_button() {
        let form = extract_search_form(&page(SEARCH_PAGE), "x").unwrap();

        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$SearchButton"),
            Some(Some("Sök"))
        );
        assert_eq!(form.state.get("ctl00$Main$SearchCase$ClearButton"), None);
    }

    #[test]
    fn search_form_reads_dropdown_and_nulls_postback() {
        let form = extract_search_form(&page(SEARCH_PAGE), "x").unwrap();

        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$BoroughSelect"),
            Some(Some("0"))
        );
        assert_eq!(form.state.get(EVENT_TARGET), Some(None));
        assert_eq!(form.state.get(EVENT_ARGUMENT), Some(None));
    }

    #[test]
    fn search_form_preserves_null_and_empty_values() {
        let form = extract_search_form(&page(SEARCH_PAGE), "x").unwrap();

        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$ReferenceInput"),
            Some(None)
        );
        assert_eq!(form.state.get("__EVENTVALIDATION"), Some(Some("")));
        assert_eq!(form.state.get("__VIEWSTATE"), Some(Some("dDwtMTA4")));
    }

    #[test]
    fn search_form_resolves_relative_action() {
        let form = extract_search_form(&page(SEARCH_PAGE), "x").unwrap();

        assert_eq!(
            form.action.as_str(),
            "http://register.test/Arenden/Default.aspx?tab=1"
        );
    }

    #[test]
    fn missing_form_is_a_parse_error() {
        let err = extract_search_form(&page("<html><body></body></html>"), "x").unwrap_err();

        assert!(matches!(err, ParseError::FormNotFound("aspnetForm")));
    }

    #[test]
    fn missing_dropdown_is_a_parse_error() {
        let html = r#"<form id="aspnetForm" action="."><input name="a$AddressInput" /></form>"#;
        let err = extract_search_form(&page(html), "x").unwrap_err();

        assert!(matches!(err, ParseError::DropdownNotFound));
    }

    #[test]
    fn dropdown_without_selection_is_a_parse_error() {
        let html = r#"<form id="aspnetForm" action=".">
            <input name="a$AddressInput" />
            <select name="borough"><option value="1">One</option></select>
        </form>"#;
        let err = extract_search_form(&page(html), "x").unwrap_err();

        assert!(matches!(err, ParseError::NoSelectedOption(name) if name == "borough"));
    }

    #[test]
    fn missing_address_field_is_a_parse_error() {
        let html = r#"<form id="aspnetForm" action=".">
            <select name="borough"><option selected="selected" value="1">One</option></select>
        </form>"#;
        let err = extract_search_form(&page(html), "x").unwrap_err();

        assert!(matches!(err, ParseError::AddressFieldNotFound(_)));
    }

    #[test]
    fn current_form_keeps_every_named_input_verbatim() {
        let page = page(SEARCH_PAGE);
        let form = current_form(&Html::parse_document(&page.html), &page.url).unwrap();

        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$AddressInput"),
            Some(Some("old value"))
        );
        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$ClearButton"),
            Some(Some("Rensa"))
        );
        assert_eq!(
            form.state.get("ctl00$Main$SearchCase$CurrentCasesCheck"),
            Some(None)
        );
        assert_eq!(form.state.get("ctl00$Main$SearchCase$BoroughSelect"), None);
    }
}
