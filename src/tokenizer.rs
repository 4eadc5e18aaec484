use crate::error::{Error, Result};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

pub struct Tokenizer {
    stemmer: Option<Stemmer>,
    punctuation: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            stemmer: None,
            punctuation: Regex::new(r"[[:punct:]]")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Same cleaning as [`Tokenizer::new`], followed by English Snowball stemming.
    pub fn with_stemming() -> Result<Self> {
        Ok(Self {
            stemmer: Some(Stemmer::create(Algorithm::English)),
            ..Self::new()?
        })
    }

    pub const fn is_stemming(&self) -> bool {
        self.stemmer.is_some()
    }

    /// Strips ASCII punctuation, lowercases and splits on whitespace.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.punctuation
            .replace_all(text, "")
            .to_lowercase()
            .split_whitespace()
            .map(|token| self.stem(token))
            .collect()
    }

    /// Lowercases, splits on whitespace and trims periods from both ends of
    /// each token. Only periods are removed here, other punctuation survives.
    pub fn vocabulary_terms(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(|token| token.trim_matches('.'))
            .filter(|token| !token.is_empty())
            .map(|token| self.stem(token))
            .collect()
    }

    fn stem(&self, token: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(token).into_owned(),
            None => token.to_string(),
        }
    }
}
