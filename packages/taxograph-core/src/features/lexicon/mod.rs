//! Concept index, source-file parsing and the taxonomy facade

mod index;
pub mod parser;
mod taxonomy;

pub use index::ConceptIndex;
pub use parser::ParsedTaxonomy;
pub use taxonomy::Taxonomy;
