pub mod inverted;
pub mod document_index;
pub mod duplicates;
