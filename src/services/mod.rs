pub mod case_table;
pub mod csv_writer;
pub mod form_extractor;
pub mod orchestrator;
pub mod postback_emulator;
pub mod session;

pub use case_table::*;
pub use csv_writer::*;
pub use form_extractor::*;
pub use orchestrator::*;
pub use postback_emulator::*;
pub use session::*;
