//! Text normalization shared by the extraction pipeline

use regex::Regex;

/// Normalizes document text to a lowercase alphanumeric form
pub struct TextNormalizer {
    non_alnum_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let non_alnum_regex = Regex::new(r"[^a-z0-9\s]").expect("Invalid character regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            non_alnum_regex,
            whitespace_regex,
        }
    }

    /// Lowercase, strip punctuation and noise, collapse whitespace, trim.
    /// Pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.non_alnum_regex.replace_all(&lowered, " ");
        self.whitespace_regex
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("Python, SQL & Tableau!"),
            "python sql tableau"
        );
    }

    #[test]
    fn test_normalize_collapses_whitespace_and_trims() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("  docker \t\n  kubernetes  "),
            "docker kubernetes"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = TextNormalizer::new();
        let inputs = [
            "Senior Data Engineer (Remote) with 5+ years!",
            "",
            "   ",
            "already normalized text",
            "Ünïcödé — and em-dashes… everywhere",
        ];
        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_normalize_empty_and_symbol_only_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("!!! ??? ..."), "");
    }
}
