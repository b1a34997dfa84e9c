//! Command-line entry point: load the configuration, generate the course,
//! write it next to the reference course.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use typing_course_gen::{generate_course, write_course, CourseConfig};

/// Typing course generator
#[derive(Parser)]
#[command(name = "typing-course-gen")]
#[command(about = "Adapt a typing-tutor course to another keyboard layout", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML file overriding the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference course file
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Directory holding the corpus datasets
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Directory the course is written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible course
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON summary of the generated lessons
    #[arg(long)]
    summary_json: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn course_config(&self) -> Result<CourseConfig> {
        let mut config = match &self.config {
            Some(path) => CourseConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => CourseConfig::default(),
        };
        if let Some(reference) = &self.reference {
            config.reference_course = reference.clone();
        }
        if let Some(dir) = &self.corpus_dir {
            config.corpus.directory = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_directory = dir.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .without_time()
        .init();

    let config = cli.course_config()?;
    let course = generate_course(&config).context("generating course")?;

    let path = config.output_path();
    write_course(&path, &course).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), lessons = course.lessons.len(), "done");

    if cli.summary_json {
        println!("{}", serde_json::to_string_pretty(&course.summary())?);
    }
    Ok(())
}
