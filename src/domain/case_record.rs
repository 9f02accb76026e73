pub const CASE_FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub reference_number: String,
    pub real_estate: String,
    pub case_type: String,
    pub case_meaning: String,
    pub start_date: String,
}

impl CaseRecord {
    pub const HEADERS: [&'static str; CASE_FIELD_COUNT] = [
        "Reference Number",
        "Real estate",
        "Case Type",
        "Case Meaning",
        "Start Date",
    ];

    /// Rows narrower than the grid are padded with empty fields, extra cells
    /// are dropped. Either way the row is kept.
    pub fn from_cells(row: usize, cells: Vec<String>) -> Self {
        if cells.len() != CASE_FIELD_COUNT {
            log::warn!(
                "Results row {} has {} data cells, expected {}",
                row,
                cells.len(),
                CASE_FIELD_COUNT
            );
        }

        let mut cells = cells.into_iter();
        let mut next = || cells.next().unwrap_or_default();

        CaseRecord {
            reference_number: next(),
            real_estate: next(),
            case_type: next(),
            case_meaning: next(),
            start_date: next(),
        }
    }

    pub fn fields(&self) -> [&str; CASE_FIELD_COUNT] {
        [
            &self.reference_number,
            &self.real_estate,
            &self.case_type,
            &self.case_meaning,
            &self.start_date,
        ]
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ResultSet {
    cases: Vec<CaseRecord>,
    pages: u32,
}

impl ResultSet {
    pub fn extend_page(&mut self, cases: Vec<CaseRecord>) {
        self.pages += 1;
        self.cases.extend(cases);
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }
}
