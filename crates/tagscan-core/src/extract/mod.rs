//! Tag extraction: marker matching inside comment segments.

mod extractor;
mod table;
mod types;

pub use extractor::extract;
pub use table::MarkerTable;
pub use types::{Tag, TagKind};
