pub const SAMPLE_SENTENCES: &str = "The cat and the dog play in the garden shed.
The dog loudly chases the cat.
Cat and dog run after the ball.
The cat sleeps in the garden.";

/// Newline-delimited collection of documents, one sentence per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    documents: Vec<String>,
}

impl Corpus {
    /// Every `'\n'` starts a new document; empty lines are kept as empty documents.
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            documents: text.split('\n').map(String::from).collect(),
        }
    }

    pub fn sample() -> Self {
        Self::parse(SAMPLE_SENTENCES)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        (1..=self.documents.len())
            .map(|i| format!("doc_{i}"))
            .collect()
    }
}
