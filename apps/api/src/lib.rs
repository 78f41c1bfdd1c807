//! Resume skill-gap analysis: text normalization, vocabulary skill extraction and
//! TF-IDF similarity between one resume and one job description.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod nlp;
pub mod routes;
pub mod skills;
pub mod state;

pub use analysis::{AnalysisError, AnalysisReport, Analyzer};
pub use nlp::NlpContext;
