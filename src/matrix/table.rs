use std::fmt;

use super::document_matrix::DocumentMatrix;

const COLUMN_GAP: &str = "  ";

fn index_width(labels: &[String]) -> usize {
    labels.iter().map(String::len).max().unwrap_or(0)
}

impl fmt::Display for DocumentMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = index_width(self.index());
        let widths = self
            .columns()
            .terms()
            .iter()
            .enumerate()
            .map(|(column, term)| {
                self.rows()
                    .iter()
                    .map(|row| row[column].to_string().len())
                    .fold(term.len(), usize::max)
            })
            .collect::<Vec<_>>();

        write!(f, "{:label_width$}", "")?;
        for (term, width) in self.columns().terms().iter().zip(&widths) {
            write!(f, "{COLUMN_GAP}{term:>width$}")?;
        }

        for (label, row) in self.index().iter().zip(self.rows()) {
            write!(f, "\n{label:<label_width$}")?;
            for (count, width) in row.iter().zip(&widths) {
                write!(f, "{COLUMN_GAP}{count:>width$}")?;
            }
        }

        Ok(())
    }
}

/// Pairwise cosine similarities of a [`DocumentMatrix`], rendered with four decimals.
pub struct SimilarityTable<'a> {
    labels: &'a [String],
    values: Vec<Vec<f64>>,
}

impl<'a> SimilarityTable<'a> {
    pub fn new(matrix: &'a DocumentMatrix) -> Self {
        Self {
            labels: matrix.index(),
            values: matrix.pairwise_similarities(),
        }
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }
}

impl fmt::Display for SimilarityTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = index_width(self.labels).max("0.0000".len());

        write!(f, "{:width$}", "")?;
        for label in self.labels {
            write!(f, "{COLUMN_GAP}{label:>width$}")?;
        }

        for (label, row) in self.labels.iter().zip(&self.values) {
            write!(f, "\n{label:<width$}")?;
            for value in row {
                write!(f, "{COLUMN_GAP}{value:>width$.4}")?;
            }
        }

        Ok(())
    }
}
