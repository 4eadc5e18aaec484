use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::{corpus::Corpus, tokenizer::Tokenizer};

/// Sorted, de-duplicated terms of a corpus. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn build(corpus: &Corpus, tokenizer: &Tokenizer) -> Self {
        let terms: BTreeSet<String> = tokenizer.vocabulary_terms(corpus.text()).into_iter().collect();
        let vocabulary = Self {
            terms: terms.into_iter().collect(),
        };

        debug!(
            terms = vocabulary.len(),
            documents = corpus.len(),
            "built vocabulary"
        );

        vocabulary
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.terms
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .ok()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.position(term).is_some()
    }
}
