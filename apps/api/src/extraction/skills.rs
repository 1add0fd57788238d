//! Skill extraction — whole-word keyword matching against a fixed
//! category table, with canonicalized display names.

use std::collections::BTreeSet;

use regex::Regex;

/// The category → keyword table. Categories are informational; matching runs
/// over the union of all keywords.
const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python",
            "javascript",
            "java",
            "c++",
            "c#",
            "php",
            "ruby",
            "go",
            "rust",
            "swift",
            "kotlin",
            "typescript",
            "scala",
            "r",
            "matlab",
            "perl",
            "shell",
            "bash",
            "powershell",
            "sql",
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "sqlite",
            "oracle",
            "sql server",
        ],
    ),
    (
        "web_technologies",
        &[
            "html",
            "css",
            "react",
            "angular",
            "vue",
            "node.js",
            "express",
            "django",
            "flask",
            "spring",
            "laravel",
            "bootstrap",
            "jquery",
            "sass",
            "less",
            "webpack",
            "babel",
            "reactjs",
            "react.js",
            "nodejs",
        ],
    ),
    (
        "databases",
        &[
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "sqlite",
            "oracle",
            "sql server",
            "elasticsearch",
            "cassandra",
            "dynamodb",
            "firebase",
            "sql",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "jenkins",
            "git",
            "github",
            "gitlab",
            "terraform",
            "ansible",
            "chef",
            "puppet",
            "nagios",
            "prometheus",
            "grafana",
        ],
    ),
    (
        "data_ai",
        &[
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "pandas",
            "numpy",
            "matplotlib",
            "seaborn",
            "jupyter",
            "tableau",
            "power bi",
        ],
    ),
    (
        "mobile",
        &[
            "android",
            "ios",
            "react native",
            "flutter",
            "xamarin",
            "cordova",
            "ionic",
        ],
    ),
];

/// Keyword matcher built once at startup from the category table. Each
/// keyword compiles to a whole-word pattern; matching is pure and
/// deterministic.
pub struct SkillLexicon {
    patterns: Vec<(&'static str, Regex)>,
}

impl SkillLexicon {
    pub fn new() -> Self {
        let mut seen = BTreeSet::new();
        let mut patterns = Vec::new();
        for (_, keywords) in SKILL_CATEGORIES {
            for keyword in *keywords {
                if seen.insert(*keyword) {
                    patterns.push((*keyword, boundary_pattern(keyword)));
                }
            }
        }
        Self { patterns }
    }

    /// Scans free text and returns the canonical names of every matched
    /// keyword, deduplicated and sorted lexicographically. Empty text yields
    /// an empty list.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut found = BTreeSet::new();
        for (keyword, pattern) in &self.patterns {
            if pattern.is_match(&lowered) {
                found.insert(canonical_name(keyword));
            }
        }
        found.into_iter().collect()
    }
}

impl Default for SkillLexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole-word pattern for one keyword. `\b` misbehaves when the keyword ends
/// in a non-word character ("c++", "c#"), so the boundaries are spelled out
/// as explicit non-word delimiters.
fn boundary_pattern(keyword: &str) -> Regex {
    let pattern = format!(r"(?:^|[^\w]){}(?:[^\w]|$)", regex::escape(keyword));
    Regex::new(&pattern).expect("keyword patterns are statically valid")
}

/// Maps a raw matched keyword to its display-form skill name.
pub fn canonical_name(keyword: &str) -> String {
    match keyword {
        "c++" | "c#" => keyword.to_uppercase(),
        "node.js" | "nodejs" => "Node.js".to_string(),
        "react" | "reactjs" | "react.js" => "React".to_string(),
        "javascript" => "JavaScript".to_string(),
        "sql" => "SQL".to_string(),
        "machine learning" => "Machine Learning".to_string(),
        "deep learning" => "Deep Learning".to_string(),
        _ => title_case(keyword),
    }
}

/// Title-cases a keyword: the first letter of every alphabetic run is
/// uppercased, the rest lowercased ("scikit-learn" → "Scikit-Learn",
/// "power bi" → "Power Bi").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_is_deterministic_and_idempotent() {
        let lexicon = SkillLexicon::new();
        let text = "Built services in Rust and Go, deployed on Kubernetes with Docker.";
        let first = lexicon.extract(text);
        let second = lexicon.extract(text);
        assert_eq!(first, second);
        assert_eq!(first, vec!["Docker", "Go", "Kubernetes", "Rust"]);
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let lexicon = SkillLexicon::new();
        assert_eq!(lexicon.extract("PYTHON and PyTorch"), vec!["Python", "Pytorch"]);
    }

    #[test]
    fn test_empty_text_yields_empty_list() {
        let lexicon = SkillLexicon::new();
        assert!(lexicon.extract("").is_empty());
    }

    #[test]
    fn test_whole_word_matching_avoids_substrings() {
        let lexicon = SkillLexicon::new();
        // "golang" must not match the "go" keyword; "rusty" must not match "rust".
        assert!(lexicon.extract("a rusty golang enthusiast").is_empty());
    }

    #[test]
    fn test_symbol_suffixed_keywords_match() {
        let lexicon = SkillLexicon::new();
        let found = lexicon.extract("Ten years of C++ and C# experience.");
        assert_eq!(found, vec!["C#", "C++"]);
    }

    #[test]
    fn test_aliases_collapse_to_one_canonical_entry() {
        let lexicon = SkillLexicon::new();
        // react, reactjs and react.js all canonicalize to React.
        let found = lexicon.extract("reactjs and react.js, also plain react");
        assert_eq!(found, vec!["React"]);
    }

    #[test]
    fn test_canonical_names_for_special_cases() {
        assert_eq!(canonical_name("node.js"), "Node.js");
        assert_eq!(canonical_name("nodejs"), "Node.js");
        assert_eq!(canonical_name("javascript"), "JavaScript");
        assert_eq!(canonical_name("sql"), "SQL");
        assert_eq!(canonical_name("machine learning"), "Machine Learning");
    }

    #[test]
    fn test_canonical_names_title_case_the_rest() {
        assert_eq!(canonical_name("python"), "Python");
        assert_eq!(canonical_name("scikit-learn"), "Scikit-Learn");
        assert_eq!(canonical_name("power bi"), "Power Bi");
        assert_eq!(canonical_name("react native"), "React Native");
    }

    #[test]
    fn test_output_is_sorted_lexicographically() {
        let lexicon = SkillLexicon::new();
        let found = lexicon.extract("sql, python, aws, javascript");
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
    }

    #[test]
    fn test_multi_word_keywords_match() {
        let lexicon = SkillLexicon::new();
        let found = lexicon.extract("Focus areas: machine learning and react native apps.");
        // "react native" also matches the standalone "react" keyword.
        assert_eq!(found, vec!["Machine Learning", "React", "React Native"]);
    }
}
