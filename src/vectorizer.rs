use std::collections::HashMap;

use crate::{tokenizer::Tokenizer, vocabulary::Vocabulary};

pub type TermCount = u32;

/// Bag-of-words counts, one entry per vocabulary term in vocabulary order.
pub type DocumentVector = Vec<TermCount>;

/// Counts how often each vocabulary term occurs in `sentence`.
///
/// The result always has `vocabulary.len()` entries. Tokens outside the
/// vocabulary are ignored, so an empty sentence gives an all-zero vector.
pub fn text_to_vector(sentence: &str, vocabulary: &Vocabulary, tokenizer: &Tokenizer) -> DocumentVector {
    let mut word_count: HashMap<String, TermCount> = HashMap::new();

    for token in tokenizer.tokenize(sentence) {
        *word_count.entry(token).or_insert(0) += 1;
    }

    vocabulary
        .terms()
        .iter()
        .map(|term| word_count.get(term).copied().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn sample() -> (Vocabulary, Tokenizer) {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let vocabulary = Vocabulary::build(&Corpus::sample(), &tokenizer);
        (vocabulary, tokenizer)
    }

    #[test]
    fn counts_vocabulary_terms() {
        let (vocabulary, tokenizer) = sample();

        let vector = text_to_vector("The dog loudly chases the cat.", &vocabulary, &tokenizer);

        assert_eq!(vector, vec![0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 2]);
        assert_eq!(vector[vocabulary.position("cat").expect("cat")], 1);
        assert_eq!(vector[vocabulary.position("the").expect("the")], 2);
    }

    #[test]
    fn case_and_punctuation_insensitive() {
        let (vocabulary, tokenizer) = sample();

        assert_eq!(
            text_to_vector("CAT! cat, Cat...", &vocabulary, &tokenizer),
            text_to_vector("cat cat cat", &vocabulary, &tokenizer)
        );
    }

    #[test]
    fn unknown_words_give_zero_vector() {
        let (vocabulary, tokenizer) = sample();

        let vector = text_to_vector("A mouse hides quietly.", &vocabulary, &tokenizer);

        assert_eq!(vector.len(), vocabulary.len());
        assert!(vector.iter().all(|&count| count == 0));
    }

    #[test]
    fn empty_sentence_gives_zero_vector() {
        let (vocabulary, tokenizer) = sample();

        assert_eq!(
            text_to_vector("", &vocabulary, &tokenizer),
            vec![0; vocabulary.len()]
        );
    }

    #[test]
    fn length_matches_vocabulary() {
        let (vocabulary, tokenizer) = sample();

        for sentence in Corpus::sample().documents() {
            assert_eq!(
                text_to_vector(sentence, &vocabulary, &tokenizer).len(),
                vocabulary.len()
            );
        }
    }
}
