//! Corpus loading: word and sentence lists turned into annotated tables.
//!
//! Input files are tab separated, one entry per line. Ranked lists carry the
//! frequency count in the last column with the token just before it; unranked
//! lists carry the text in the last column. Anything in front (such as the
//! running id of Leipzig corpus files) is ignored.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::course_engine::{
    error::{CourseError, Result},
    layout::Stages,
    models::CorpusRecord,
    ngram,
};

/// Reads a text file and returns all its lines.
pub(crate) fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| CourseError::io(path, e))?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// Split raw lines into `(text, count)` pairs.
pub fn parse_rows(path: &Path, lines: &[String], with_count: bool) -> Result<Vec<(String, Option<u64>)>> {
    let mut rows = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();

        let row = if with_count {
            if fields.len() < 2 {
                return Err(CourseError::MalformedRow {
                    path: path.to_path_buf(),
                    line: i + 1,
                    reason: "expected a token and a count column".to_string(),
                });
            }
            let raw_count = fields[fields.len() - 1].trim();
            let count = raw_count.parse::<u64>().map_err(|_| CourseError::MalformedRow {
                path: path.to_path_buf(),
                line: i + 1,
                reason: format!("count '{raw_count}' is not an integer"),
            })?;
            (fields[fields.len() - 2].to_string(), Some(count))
        } else {
            (fields[fields.len() - 1].to_string(), None)
        };

        if row.0.is_empty() {
            warn!(path = %path.display(), line = i + 1, "empty token");
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Annotate one entry with its character set, length and stage.
///
/// The character set is taken from the lowercased text.
pub fn annotate(text: String, count: Option<u64>, stages: &Stages) -> CorpusRecord {
    let characters: BTreeSet<char> = text.to_lowercase().chars().collect();
    let group = stages.group_of(&characters);
    CorpusRecord {
        length: text.chars().count(),
        text,
        count,
        characters,
        group,
    }
}

/// Build an annotated table from already parsed rows.
///
/// Ranked rows below `min_count` are dropped and the rest sorted by
/// descending count; equal counts keep their input order.
pub fn build_table(rows: Vec<(String, Option<u64>)>, stages: &Stages, min_count: u64) -> Vec<CorpusRecord> {
    let mut records: Vec<CorpusRecord> = rows
        .into_iter()
        .filter(|(_, count)| count.map_or(true, |c| c >= min_count))
        .map(|(text, count)| annotate(text, count, stages))
        .collect();

    if records.iter().any(|r| r.count.is_some()) {
        records.sort_by(|a, b| b.count.cmp(&a.count));
    }
    records
}

/// Load and concatenate one or more list files into a single table.
pub fn load_table<P: AsRef<Path>>(
    paths: &[P],
    stages: &Stages,
    with_count: bool,
    min_count: u64,
) -> Result<Vec<CorpusRecord>> {
    let mut rows = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let lines = read_lines(path)?;
        let parsed = parse_rows(path, &lines, with_count)?;
        debug!(path = %path.display(), rows = parsed.len(), "corpus file read");
        rows.extend(parsed);
    }
    Ok(build_table(rows, stages, min_count))
}

// ---------------------------------------------------------------------------
// Corpus tables
// ---------------------------------------------------------------------------

/// Read-only tables shared by all lesson generators.
#[derive(Debug, Clone, Default)]
pub struct CorpusTables {
    pub words: Vec<CorpusRecord>,
    pub sentences: Vec<CorpusRecord>,
    pub bigrams: Vec<CorpusRecord>,
}

/// Word and sentence list paths for the given datasets, following the
/// `<dir>/<name>/<name>-words.txt` convention of the Leipzig downloads.
pub fn dataset_paths(corpus_dir: &Path, datasets: &[String]) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let words = datasets
        .iter()
        .map(|name| corpus_dir.join(name).join(format!("{name}-words.txt")))
        .collect();
    let sentences = datasets
        .iter()
        .map(|name| corpus_dir.join(name).join(format!("{name}-sentences.txt")))
        .collect();
    (words, sentences)
}

impl CorpusTables {
    pub fn load<P: AsRef<Path>>(
        word_files: &[P],
        sentence_files: &[P],
        stages: &Stages,
        min_word_count: u64,
    ) -> Result<Self> {
        let words = load_table(word_files, stages, true, min_word_count)?;
        let sentences = load_table(sentence_files, stages, false, 0)?;
        Ok(Self::from_tables(words, sentences, stages))
    }

    /// Derive the bigram table from the sentences.
    pub fn from_tables(words: Vec<CorpusRecord>, sentences: Vec<CorpusRecord>, stages: &Stages) -> Self {
        let bigrams = ngram::build_ngram_table(&sentences, stages, 2);
        info!(
            words = words.len(),
            sentences = sentences.len(),
            bigrams = bigrams.len(),
            "corpus tables ready"
        );
        CorpusTables { words, sentences, bigrams }
    }
}
