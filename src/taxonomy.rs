//! Static skill taxonomy: canonical skill names grouped by professional category

use std::collections::{HashMap, HashSet};

/// Category returned for skills absent from the taxonomy
pub const FALLBACK_CATEGORY: &str = "Specialized Skills";

/// Fixed category to skill-list table. Skill names are stored lowercase and
/// act as case-insensitive keys.
const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "python", "java", "c++", "c", "c#", "go", "typescript", "javascript", "sql",
            "r", "bash", "html", "css", "kotlin", "swift", "dart", "rust", "scala", "php",
        ],
    ),
    (
        "Data Science Libraries",
        &[
            "numpy", "pandas", "matplotlib", "seaborn", "plotly", "scikit-learn", "xgboost",
            "lightgbm", "catboost", "tensorflow", "keras", "pytorch", "statsmodels",
            "opencv", "nltk", "spacy", "transformers", "gensim", "dask", "polars",
        ],
    ),
    (
        "Web Development Frameworks",
        &[
            "flask", "django", "fastapi", "express", "next.js", "nuxt.js", "spring boot",
            "ruby on rails", "laravel", "svelte", "vue.js", "react", "angular", "blazor",
        ],
    ),
    (
        "Development Tools",
        &[
            "git", "github", "gitlab", "bitbucket", "docker", "kubernetes", "jenkins",
            "ansible", "vagrant", "jira", "postman", "powershell", "linux", "terminal",
            "notion", "slack", "vs code", "pycharm", "eclipse", "intellij", "android studio",
        ],
    ),
    (
        "Business Intelligence",
        &[
            "excel", "powerbi", "tableau", "looker", "metabase", "qlikview", "superset",
            "google data studio", "databricks", "alteryx", "domo",
        ],
    ),
    (
        "Database Technologies",
        &[
            "mysql", "postgresql", "sqlite", "mongodb", "redis", "cassandra", "neo4j",
            "oracle", "dynamodb", "bigquery", "snowflake", "clickhouse", "elasticsearch",
        ],
    ),
    (
        "Cloud Platforms",
        &[
            "aws", "azure", "gcp", "heroku", "vercel", "netlify", "firebase", "supabase",
            "digitalocean", "linode", "cloudflare",
        ],
    ),
    (
        "Big Data Technologies",
        &[
            "hadoop", "spark", "hive", "pig", "kafka", "flink", "sqoop", "airflow", "dbt",
            "databricks", "presto", "trino",
        ],
    ),
    (
        "Machine Learning Concepts",
        &[
            "machine learning", "deep learning", "supervised learning", "unsupervised learning",
            "reinforcement learning", "model evaluation", "cross validation",
            "feature engineering", "model deployment", "dimensionality reduction",
            "ensemble methods", "automl", "hyperparameter tuning",
        ],
    ),
    (
        "Artificial Intelligence Domains",
        &[
            "natural language processing", "computer vision", "optical character recognition",
            "speech recognition", "large language models", "recommendation systems",
            "chatbots", "generative ai", "prompt engineering",
        ],
    ),
    (
        "MLOps and Model Management",
        &[
            "mlflow", "tensorboard", "data version control", "sagemaker", "tfx", "onnx",
            "torchserve", "gradio", "streamlit", "kubeflow", "feast",
        ],
    ),
    (
        "Professional Skills",
        &[
            "project management", "team leadership", "communication", "problem solving",
            "analytical thinking", "stakeholder management", "agile methodology", "scrum",
        ],
    ),
];

/// Immutable skill-to-category lookup, built once at startup and shared
/// read-only across analysis runs.
pub struct SkillTaxonomy {
    category_index: HashMap<String, &'static str>,
    all_skills: HashSet<String>,
}

impl SkillTaxonomy {
    /// Build the reverse index from the static category table
    pub fn new() -> Self {
        let mut category_index = HashMap::new();
        let mut all_skills = HashSet::new();

        for (category, skills) in CATEGORY_TABLE {
            for skill in *skills {
                let key = skill.to_lowercase();
                // A skill listed under two categories keeps its first category
                category_index.entry(key.clone()).or_insert(*category);
                all_skills.insert(key);
            }
        }

        Self {
            category_index,
            all_skills,
        }
    }

    /// Category for a skill, case-insensitive. Total: unknown skills fall
    /// back to [`FALLBACK_CATEGORY`].
    pub fn category_of(&self, skill: &str) -> &'static str {
        self.category_index
            .get(&skill.to_lowercase())
            .copied()
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// True if the skill is a canonical taxonomy entry (case-insensitive)
    pub fn contains(&self, skill: &str) -> bool {
        self.all_skills.contains(&skill.to_lowercase())
    }

    /// All canonical skill strings, lowercase
    pub fn all_skills(&self) -> &HashSet<String> {
        &self.all_skills
    }

    /// Skills belonging to a specific category, sorted for stable output
    pub fn skills_in_category(&self, category: &str) -> Vec<&str> {
        let mut skills: Vec<&str> = self
            .category_index
            .iter()
            .filter(|(_, cat)| **cat == category)
            .map(|(skill, _)| skill.as_str())
            .collect();
        skills.sort_unstable();
        skills
    }

    pub fn skill_count(&self) -> usize {
        self.all_skills.len()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        let taxonomy = SkillTaxonomy::new();
        assert_eq!(taxonomy.category_of("Python"), "Programming Languages");
        assert_eq!(taxonomy.category_of("PYTHON"), "Programming Languages");
        assert_eq!(taxonomy.category_of("tableau"), "Business Intelligence");
    }

    #[test]
    fn test_unknown_skill_gets_fallback_category() {
        let taxonomy = SkillTaxonomy::new();
        assert_eq!(taxonomy.category_of("underwater basket weaving"), FALLBACK_CATEGORY);
        assert_eq!(taxonomy.category_of(""), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_all_skills_cover_every_category_entry() {
        let taxonomy = SkillTaxonomy::new();
        assert!(taxonomy.skill_count() > 100);
        assert!(taxonomy.contains("spring boot"));
        assert!(taxonomy.contains("C++"));
        assert!(!taxonomy.contains("cobol"));
    }

    #[test]
    fn test_skills_in_category_sorted() {
        let taxonomy = SkillTaxonomy::new();
        let cloud = taxonomy.skills_in_category("Cloud Platforms");
        assert!(cloud.contains(&"aws"));
        let mut sorted = cloud.clone();
        sorted.sort_unstable();
        assert_eq!(cloud, sorted);
    }
}
