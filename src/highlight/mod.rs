pub mod stemmed;
pub mod substring;

pub use stemmed::{highlight, stem_terms};
pub use substring::highlight_first;
