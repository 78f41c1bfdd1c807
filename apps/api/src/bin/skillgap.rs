use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillgap::analysis::{report::render_text, Analyzer};
use skillgap::ingest::{PathSource, TextSource};
use skillgap::nlp::NlpContext;
use skillgap::skills::VocabularySource;

#[derive(Parser, Debug)]
#[command(name = "skillgap")]
#[command(version, about = "Compare a resume against a job description and report skill gaps", long_about = None)]
struct Cli {
    /// Resume file (.pdf or plain text)
    resume: PathBuf,

    /// Job description file (.pdf or plain text)
    job_description: PathBuf,

    /// Custom skill vocabulary, one skill per line
    #[arg(long)]
    skills_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillgap=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source = match cli.skills_file {
        Some(path) => VocabularySource::File(path),
        None => VocabularySource::Builtin,
    };
    let nlp = NlpContext::load(&source).context("Failed to initialize skill vocabulary")?;
    let analyzer = Analyzer::with_default_scorer(Arc::new(nlp));

    let resume = PathSource::new(&cli.resume);
    let jd = PathSource::new(&cli.job_description);
    let resume_text = resume
        .read_text()
        .await
        .with_context(|| format!("Error reading resume {}", resume.name()))?;
    let jd_text = jd
        .read_text()
        .await
        .with_context(|| format!("Error reading job description {}", jd.name()))?;

    let report = analyzer.analyze(&resume_text, &jd_text)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
