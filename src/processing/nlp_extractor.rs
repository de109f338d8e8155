//! Rule-based skill extraction: entity candidates plus exact phrase matching
//! against the skill taxonomy

use crate::error::{Result, SkillGapError};
use crate::taxonomy::SkillTaxonomy;
use aho_corasick::AhoCorasick;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Detects taxonomy skills in arbitrary document text.
///
/// Two independent passes, unioned: a lightweight entity recognizer that
/// collects org/product-like spans and keeps those equal to a taxonomy skill,
/// and an exact case-insensitive phrase matcher seeded with every taxonomy
/// skill string. Presence is binary; no ranking.
pub struct NlpSkillExtractor {
    phrase_matcher: AhoCorasick,
    patterns: Vec<String>,
    vocabulary: HashSet<String>,
}

impl NlpSkillExtractor {
    /// Build the phrase automaton over the full taxonomy. A build failure is
    /// a fatal initialization error; extraction itself never fails.
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self> {
        let mut patterns: Vec<String> = taxonomy.all_skills().iter().cloned().collect();

        // Sort patterns by length (longest first) to prioritize longer matches
        patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let phrase_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                SkillGapError::ModelLoading(format!("Failed to build skill phrase matcher: {}", e))
            })?;

        Ok(Self {
            phrase_matcher,
            patterns,
            vocabulary: taxonomy.all_skills().clone(),
        })
    }

    /// Extract the set of taxonomy skills present in `text`, lowercased.
    /// Empty text yields an empty set; repeated skills collapse to one entry.
    pub fn extract(&self, text: &str) -> HashSet<String> {
        if text.trim().is_empty() {
            return HashSet::new();
        }

        let mut found = self.entity_pass(text);
        found.extend(self.phrase_pass(text));
        found
    }

    /// Entity pass: collect capitalized word runs and symbol-carrying tokens
    /// (the spans an entity recognizer would tag as org/product-like), then
    /// keep only candidates that exactly equal a taxonomy skill.
    fn entity_pass(&self, text: &str) -> HashSet<String> {
        let mut found = HashSet::new();

        for candidate in self.entity_candidates(text) {
            let lowered = candidate.to_lowercase();
            if self.vocabulary.contains(&lowered) {
                found.insert(lowered);
            }
        }

        found
    }

    fn entity_candidates(&self, text: &str) -> Vec<String> {
        let mut candidates = Vec::new();

        // Capitalized words and consecutive capitalized runs ("Spring Boot")
        let mut run: Vec<&str> = Vec::new();
        for word in text.unicode_words() {
            let capitalized = word.chars().next().map_or(false, |c| c.is_uppercase());
            if capitalized {
                candidates.push(word.to_string());
                run.push(word);
            } else {
                if run.len() >= 2 {
                    candidates.push(run.join(" "));
                }
                run.clear();
            }
        }
        if run.len() >= 2 {
            candidates.push(run.join(" "));
        }

        // Tokens carrying digits or language sigils ("c++", "c#", "k8s"),
        // which word segmentation would otherwise strip
        for raw in text.split_whitespace() {
            let token = Self::clean_token(raw);
            if !token.is_empty()
                && token
                    .chars()
                    .any(|c| c.is_ascii_digit() || c == '+' || c == '#')
            {
                candidates.push(token);
            }
        }

        candidates
    }

    /// Strip surrounding punctuation while preserving sigils inside tokens
    fn clean_token(raw: &str) -> String {
        raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
            .to_string()
    }

    /// Phrase pass: exact multi-word matching over the raw text, accepted
    /// only on word boundaries since the taxonomy holds one-letter skills.
    fn phrase_pass(&self, text: &str) -> HashSet<String> {
        let mut found = HashSet::new();

        for mat in self.phrase_matcher.find_iter(text) {
            if Self::is_word_bounded(text, mat.start(), mat.end()) {
                found.insert(self.patterns[mat.pattern().as_usize()].clone());
            }
        }

        found
    }

    fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> NlpSkillExtractor {
        NlpSkillExtractor::new(&SkillTaxonomy::new()).unwrap()
    }

    #[test]
    fn test_extract_single_word_skills() {
        let skills = extractor().extract("Experienced with Python, SQL and Tableau.");
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("tableau"));
    }

    #[test]
    fn test_extract_multi_word_phrases() {
        let skills =
            extractor().extract("Built models using machine learning and natural language processing");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("natural language processing"));
    }

    #[test]
    fn test_single_letter_skills_respect_word_boundaries() {
        // "r" must not fire inside "rust" or "server", "c" not inside "scala"
        let skills = extractor().extract("rust developer maintaining scala services on a server");
        assert!(skills.contains("rust"));
        assert!(skills.contains("scala"));
        assert!(!skills.contains("r"));
        assert!(!skills.contains("c"));
    }

    #[test]
    fn test_sigil_skills_are_detected() {
        let skills = extractor().extract("Worked in C++ and C# on legacy systems");
        assert!(skills.contains("c++"));
        assert!(skills.contains("c#"));
    }

    #[test]
    fn test_standalone_r_is_detected() {
        let skills = extractor().extract("statistical analysis in R and python");
        assert!(skills.contains("r"));
        assert!(skills.contains("python"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("   \n\t ").is_empty());
    }

    #[test]
    fn test_repeated_skill_collapses_to_one_entry() {
        let skills = extractor().extract("python python Python PYTHON");
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("python"));
    }

    #[test]
    fn test_capitalized_run_matches_multi_word_skill() {
        let skills = extractor().extract("Backend services built with Spring Boot");
        assert!(skills.contains("spring boot"));
    }

    #[test]
    fn test_non_taxonomy_entities_are_ignored() {
        let skills = extractor().extract("Worked at Initech on TPS reports");
        assert!(!skills.iter().any(|s| s.contains("initech")));
        assert!(!skills.iter().any(|s| s.contains("tps")));
    }
}
