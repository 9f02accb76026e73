use std::{fs::File, io::Write, path::Path};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::{CaseRecord, ScrapeError};

/// Every field quoted, CRLF line endings, header row first.
pub fn write_cases<W: Write>(writer: W, cases: &[CaseRecord]) -> Result<(), ScrapeError> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(CaseRecord::HEADERS)?;
    for case in cases {
        wtr.write_record(case.fields())?;
    }
    wtr.flush()?;

    Ok(())
}

pub fn save_cases(path: &Path, cases: &[CaseRecord]) -> Result<(), ScrapeError> {
    let file = File::create(path)?;
    write_cases(file, cases)?;

    log::info!("Wrote {} cases to {}", cases.len(), path.display());
    Ok(())
}
