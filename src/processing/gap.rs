//! Skill set data model and gap resolution

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Ordered skill name set; ordering keeps gap reports deterministic
pub type SkillSet = BTreeSet<String>;

/// Importance tier assigned to a job-required skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unspecified,
}

/// Proficiency tier assigned to a resume skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
    Basic,
    #[serde(other)]
    Unspecified,
}

/// Per-skill metadata produced by LLM extraction. Job descriptions carry
/// importance and a must-have flag; resumes carry a proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(default = "SkillRecord::default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_have: Option<bool>,
}

impl SkillRecord {
    fn default_category() -> String {
        crate::taxonomy::FALLBACK_CATEGORY.to_string()
    }
}

/// Skills produced by one extraction run. The NLP path yields a bare name
/// set; the LLM path yields names annotated with metadata. Matching only
/// ever looks at the case-folded key set of either variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExtractedSkills {
    Bare(SkillSet),
    Annotated(BTreeMap<String, SkillRecord>),
}

impl ExtractedSkills {
    /// Case-folded skill name set, with duplicates collapsed
    pub fn names(&self) -> SkillSet {
        match self {
            ExtractedSkills::Bare(set) => set.iter().map(|s| s.to_lowercase()).collect(),
            ExtractedSkills::Annotated(map) => map.keys().map(|s| s.to_lowercase()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ExtractedSkills::Bare(set) => set.is_empty(),
            ExtractedSkills::Annotated(map) => map.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ExtractedSkills::Bare(set) => set.len(),
            ExtractedSkills::Annotated(map) => map.len(),
        }
    }
}

/// Outcome of semantic matching: a partition of the job-required skill set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: SkillSet,
    pub missing: SkillSet,
}

/// Full gap analysis for one extraction method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    /// Job skills with a semantically similar resume counterpart
    pub matched: SkillSet,
    /// Job skills with no sufficiently similar resume skill
    pub missing: SkillSet,
    /// Resume skills with no exact-string counterpart among job skills
    pub extra: SkillSet,
}

/// Resolve the gap report from a semantic match result and the raw skill
/// sets of both documents.
///
/// `extra` is a plain set difference under exact string equality after case
/// folding, deliberately not semantic: a resume skill semantically close to
/// a job skill still counts as extra unless string-identical to one. This
/// keeps "skills beyond requirements" reporting conservative and explainable.
pub fn resolve(match_result: MatchResult, resume_skills: &SkillSet, jd_skills: &SkillSet) -> GapReport {
    let extra = resume_skills.difference(jd_skills).cloned().collect();

    GapReport {
        matched: match_result.matched,
        missing: match_result.missing,
        extra,
    }
}
