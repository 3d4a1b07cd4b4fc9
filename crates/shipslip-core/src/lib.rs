pub mod error;
pub mod extract;
pub mod keywords;
pub mod record;

pub use error::CoreError;
pub use extract::{extract_contact, Extractor};
pub use keywords::{KeywordKind, KeywordLists, KeywordSet};
pub use record::{ContactRecord, DisplayBoard, DisplayFields, FillTarget};
