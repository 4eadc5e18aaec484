mod document_matrix;
mod table;

pub use document_matrix::DocumentMatrix;
pub use table::SimilarityTable;
