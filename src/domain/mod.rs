pub mod case_record;
pub mod error;
pub mod form_state;
pub mod postback;

pub use case_record::*;
pub use error::*;
pub use form_state::*;
pub use postback::*;
