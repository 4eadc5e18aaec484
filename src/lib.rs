pub mod corpus;
pub mod error;
pub mod matrix;
pub mod similarity;
pub mod tokenizer;
pub mod vectorizer;
pub mod vocabulary;

pub use corpus::{Corpus, SAMPLE_SENTENCES};
pub use error::{Error, Result};
pub use matrix::{DocumentMatrix, SimilarityTable};
pub use similarity::cosine_similarity;
pub use tokenizer::Tokenizer;
pub use vectorizer::{text_to_vector, DocumentVector};
pub use vocabulary::Vocabulary;
