pub mod json_extract;
pub mod mcq_parser;
pub mod notes_parser;
pub mod written_parser;

pub use json_extract::extract_first_json_object;
pub use mcq_parser::{parse_mcq, ParseDefect};
pub use notes_parser::{parse_notes, sectionize};
pub use written_parser::{parse_categories, parse_written};
