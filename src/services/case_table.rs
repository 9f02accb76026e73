use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::domain::CaseRecord;

// html5ever wraps bare rows in an implied <tbody>
static GRID_ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "table.DataGrid > tr, table.DataGrid > thead > tr, \
         table.DataGrid > tbody > tr, table.DataGrid > tfoot > tr",
    )
    .unwrap()
});
static ITEM_CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.DataGridItemCell").unwrap());

// Header, pager and footer rows carry no item cells. No grid means no cases.
pub fn parse_case_table(html: &str) -> Vec<CaseRecord> {
    let document = Html::parse_document(html);

    document
        .select(&GRID_ROW_SELECTOR)
        .enumerate()
        .filter_map(|(row, tr)| {
            let cells: Vec<String> = tr
                .select(&ITEM_CELL_SELECTOR)
                .map(|td| td.text().collect::<String>().trim().to_string())
                .collect();

            (!cells.is_empty()).then_some((row, cells))
        })
        .map(|(row, cells)| CaseRecord::from_cells(row, cells))
        .collect()
}
