//! The static skill vocabulary and loading of custom vocabularies.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

/// Curated skill labels. Multi-word entries are matched as contiguous phrases.
const BUILTIN_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "c++", "c", "c#", ".net", "javascript", "typescript", "html", "css", "sql",
    "r", "go", "ruby", "php", "swift", "kotlin", "rust", "dart", "scala", "perl", "bash", "shell",
    "powershell", "matlab",
    // AI / ML / data science
    "machine learning", "deep learning", "nlp", "natural language processing", "computer vision",
    "generative ai", "llm", "large language models", "gpt", "bert", "scikit-learn", "tensorflow",
    "pytorch", "keras", "pandas", "numpy", "matplotlib", "seaborn", "scipy", "statsmodels",
    "opencv", "huggingface", "transformers", "nltk", "spacy", "data analysis",
    "data visualization", "data engineering", "reinforcement learning", "supervised learning",
    "unsupervised learning", "xgboost", "lightgbm", "catboost", "jupyter", "colab", "databricks",
    "snowflake", "bigquery", "redshift",
    // Web development
    "flask", "django", "fastapi", "react", "react.js", "angular", "vue", "vue.js", "node.js",
    "node", "express", "express.js", "spring", "spring boot", "hibernate", "rest api",
    "restful api", "graphql", "soap", "json", "xml", "ajax", "jquery", "bootstrap",
    "tailwind css", "sass", "less", "asp.net", "laravel", "ruby on rails", "symfony",
    // Databases
    "mysql", "postgresql", "postgres", "mongodb", "sqlite", "redis", "oracle", "sql server",
    "mssql", "dynamodb", "cassandra", "couchdb", "mariadb", "neo4j", "elasticsearch",
    // DevOps / cloud / infrastructure
    "aws", "amazon web services", "azure", "gcp", "google cloud platform", "docker", "kubernetes",
    "k8s", "jenkins", "git", "github", "gitlab", "bitbucket", "ci/cd", "continuous integration",
    "continuous deployment", "terraform", "ansible", "chef", "puppet", "vagrant", "linux", "unix",
    "ubuntu", "centos", "redhat", "nginx", "apache", "haproxy", "nagios", "prometheus", "grafana",
    "s3", "ec2", "lambda", "cloudformation",
    // Big data
    "spark", "apache spark", "hadoop", "kafka", "apache kafka", "hive", "airflow",
    "apache airflow", "pig", "mapreduce", "hbase", "flink",
    // Mobile
    "android", "ios", "flutter", "react native", "xamarin", "ionic", "swiftui",
    // Engineering practices and tools
    "agile", "scrum", "kanban", "jira", "confluence", "trello", "sdlc", "oop",
    "object oriented programming", "design patterns", "microservices", "serverless", "tdd",
    "test driven development", "bdd", "selenium", "pytest", "junit", "mocha", "jest", "cypress",
    // Other technical skills
    "blockchain", "crypto", "smart contracts", "solidity", "ethereum", "iot",
    "internet of things", "embedded systems", "robotics", "arduino", "raspberry pi",
    "cybersecurity", "ethical hacking", "penetration testing", "network security",
    "cryptography", "tableau", "power bi", "excel", "google sheets", "sap", "salesforce",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Failed to read skill vocabulary from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Skill vocabulary is empty")]
    Empty,
}

/// Where the process loads its skill vocabulary from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum VocabularySource {
    #[default]
    Builtin,
    File(PathBuf),
}

/// Ordered, deduplicated, lowercase skill labels. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl SkillVocabulary {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Builds a vocabulary from arbitrary labels: trimmed, lowercased, first occurrence wins.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for entry in entries {
            let label = entry.as_ref().trim().to_lowercase();
            if label.is_empty() {
                continue;
            }
            if seen.insert(label.clone()) {
                out.push(label);
            } else {
                warn!("Duplicate skill vocabulary entry '{label}' ignored");
            }
        }
        if out.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { entries: out })
    }

    /// Parses one entry per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, VocabularyError> {
        Self::from_entries(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let text = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn load(source: &VocabularySource) -> Result<Self, VocabularyError> {
        let vocabulary = match source {
            VocabularySource::Builtin => Self::builtin(),
            VocabularySource::File(path) => Self::from_file(path)?,
        };
        info!("Skill vocabulary loaded ({} entries)", vocabulary.len());
        Ok(vocabulary)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_no_duplicates() {
        let vocab = SkillVocabulary::builtin();
        let unique: HashSet<_> = vocab.entries().iter().collect();
        assert_eq!(unique.len(), vocab.len());
    }

    #[test]
    fn test_builtin_entries_are_lowercase() {
        for entry in SkillVocabulary::builtin().entries() {
            assert_eq!(entry, &entry.to_lowercase());
        }
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let vocab = SkillVocabulary::parse("# languages\nRust\n\n  Go  \n# done\n").unwrap();
        assert_eq!(vocab.entries(), &["rust".to_string(), "go".to_string()]);
    }

    #[test]
    fn test_duplicates_collapse_keeping_first_position() {
        let vocab = SkillVocabulary::from_entries(["Docker", "rust", "docker"]).unwrap();
        assert_eq!(vocab.entries(), &["docker".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        assert!(matches!(
            SkillVocabulary::parse("# nothing here\n\n"),
            Err(VocabularyError::Empty)
        ));
    }

    #[test]
    fn test_from_file_reads_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kafka\nmachine learning").unwrap();
        let vocab = SkillVocabulary::from_file(file.path()).unwrap();
        assert!(vocab.contains("machine learning"));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = VocabularySource::File(PathBuf::from("/definitely/not/here/skills.txt"));
        assert!(matches!(
            SkillVocabulary::load(&source),
            Err(VocabularyError::Io { .. })
        ));
    }
}
