use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    corpus::Corpus,
    error::{Error, Result},
    similarity::{cosine_similarity, is_zero_vector},
    tokenizer::Tokenizer,
    vectorizer::{text_to_vector, DocumentVector, TermCount},
    vocabulary::Vocabulary,
};

/// Documents by vocabulary table of term counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMatrix {
    columns: Vocabulary,
    index: Vec<String>,
    rows: Vec<DocumentVector>,
}

impl DocumentMatrix {
    pub fn build(corpus: &Corpus, tokenizer: &Tokenizer) -> Self {
        let columns = Vocabulary::build(corpus, tokenizer);
        let rows = corpus
            .documents()
            .iter()
            .map(|sentence| text_to_vector(sentence, &columns, tokenizer))
            .collect::<Vec<_>>();

        debug!(
            rows = rows.len(),
            columns = columns.len(),
            stemming = tokenizer.is_stemming(),
            "built document matrix"
        );

        Self {
            columns,
            index: corpus.labels(),
            rows,
        }
    }

    pub const fn columns(&self) -> &Vocabulary {
        &self.columns
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn rows(&self) -> &[DocumentVector] {
        &self.rows
    }

    pub fn row(&self, label: &str) -> Option<&[TermCount]> {
        self.index
            .iter()
            .position(|l| l == label)
            .map(|i| self.rows[i].as_slice())
    }

    pub fn get(&self, label: &str, term: &str) -> Option<TermCount> {
        let column = self.columns.position(term)?;
        self.row(label).map(|row| row[column])
    }

    /// Cosine similarity of the rows at positions `a` and `b`.
    ///
    /// Empty documents have zero vectors, for which the result is `NaN`.
    pub fn similarity(&self, a: usize, b: usize) -> Result<f64> {
        let row_a = self.rows.get(a).ok_or(Error::DocumentNotFound(a))?;
        let row_b = self.rows.get(b).ok_or(Error::DocumentNotFound(b))?;

        if is_zero_vector(row_a) || is_zero_vector(row_b) {
            warn!(
                a = %self.index[a],
                b = %self.index[b],
                "zero vector in comparison, similarity is undefined"
            );
        }

        Ok(cosine_similarity(row_a, row_b))
    }

    pub fn pairwise_similarities(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|a| self.rows.iter().map(|b| cosine_similarity(a, b)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn sample() -> DocumentMatrix {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        DocumentMatrix::build(&Corpus::sample(), &tokenizer)
    }

    #[test]
    fn sample_rows() {
        let matrix = sample();

        assert_eq!(matrix.index(), ["doc_1", "doc_2", "doc_3", "doc_4"]);
        assert_eq!(
            matrix.rows(),
            [
                vec![0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 3],
                vec![0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 2],
                vec![1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1],
                vec![0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 2],
            ]
        );
        assert!(matrix
            .rows()
            .iter()
            .all(|row| row.len() == matrix.columns().len()));
    }

    #[test]
    fn lookup() {
        let matrix = sample();

        assert_eq!(matrix.get("doc_1", "the"), Some(3));
        assert_eq!(matrix.get("doc_3", "ball"), Some(1));
        assert_eq!(matrix.get("doc_4", "dog"), Some(0));
        assert_eq!(matrix.get("doc_5", "dog"), None);
        assert_eq!(matrix.get("doc_1", "mouse"), None);
        assert_eq!(matrix.row("doc_2").map(<[u32]>::len), Some(14));
    }

    #[test]
    fn similarity_values() {
        let matrix = sample();

        let s12 = matrix.similarity(0, 1).expect("Failed to compare");
        let s13 = matrix.similarity(0, 2).expect("Failed to compare");

        assert!((s12 - 1.0 / 2.0_f64.sqrt()).abs() < EPSILON, "got {s12}");
        assert!((s13 - 3.0 / (2.0 * 7.0_f64.sqrt())).abs() < EPSILON, "got {s13}");
        assert!((matrix.similarity(2, 2).expect("Failed to compare") - 1.0).abs() < EPSILON);
    }

    #[test]
    fn similarity_out_of_range() {
        let matrix = sample();

        assert!(matches!(
            matrix.similarity(0, 4),
            Err(Error::DocumentNotFound(4))
        ));
    }

    #[test]
    fn empty_document_similarity_is_nan() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let matrix = DocumentMatrix::build(&Corpus::parse("the cat\n"), &tokenizer);

        assert_eq!(matrix.rows()[1], vec![0, 0]);
        assert!(matrix.similarity(0, 1).expect("Failed to compare").is_nan());
    }

    #[test]
    fn pairwise_is_symmetric() {
        let matrix = sample();
        let pairwise = matrix.pairwise_similarities();

        assert_eq!(pairwise.len(), 4);
        for (i, row) in pairwise.iter().enumerate() {
            assert!((row[i] - 1.0).abs() < EPSILON);
            for (j, value) in row.iter().enumerate() {
                assert!((value - pairwise[j][i]).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn serializes_columns_index_rows() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let matrix = DocumentMatrix::build(&Corpus::parse("b a\na"), &tokenizer);

        assert_eq!(
            serde_json::to_string(&matrix).expect("Failed to serialize"),
            r#"{"columns":["a","b"],"index":["doc_1","doc_2"],"rows":[[1,1],[1,0]]}"#
        );
    }
}
