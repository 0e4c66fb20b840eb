/// Source of the entities-per-word ratio for a text.
pub trait DensityEstimator: Send + Sync {
    /// Ratio in `[0, 1]`; empty text yields `0.0`.
    fn estimate(&self, text: &str) -> f64;
}

/// Counts capitalized mid-sentence words, acronyms and tokens with digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalDensityEstimator;

impl DensityEstimator for LexicalDensityEstimator {
    fn estimate(&self, text: &str) -> f64 {
        let mut words = 0usize;
        let mut entities = 0usize;
        let mut sentence_start = true;

        for raw in text.split_whitespace() {
            let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if token.is_empty() {
                sentence_start |= ends_sentence(raw);
                continue;
            }

            words += 1;
            if is_entity_like(token, sentence_start) {
                entities += 1;
            }
            sentence_start = ends_sentence(raw);
        }

        if words == 0 {
            return 0.0;
        }
        entities as f64 / words as f64
    }
}

fn ends_sentence(raw: &str) -> bool {
    raw.ends_with(['.', '!', '?'])
}

/// Surface-form entity test for a punctuation-trimmed token.
///
/// A capitalized word only counts when it does not open a sentence. Single
/// letters such as the pronoun "I" never count.
pub fn is_entity_like(token: &str, sentence_start: bool) -> bool {
    if token.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }

    let letters = token.chars().filter(|c| c.is_alphabetic()).count();
    if letters < 2 {
        return false;
    }
    if token.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase) {
        return true;
    }

    !sentence_start && token.chars().next().is_some_and(char::is_uppercase)
}
