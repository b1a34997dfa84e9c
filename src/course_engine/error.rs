//! Error type shared by every stage of the pipeline.
//!
//! Nothing here is recoverable: the binary aborts on the first error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {reason}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("layout mismatch: {0}")]
    LayoutMismatch(String),

    #[error("requested {requested} sentences but only {available} match the filter")]
    NotEnoughSentences { requested: usize, available: usize },

    #[error("no entries left to build lesson \"{lesson}\"")]
    EmptySelection { lesson: String },

    #[error("reference lesson {index} does not exist (course has {available})")]
    MissingReferenceLesson { index: usize, available: usize },

    #[error("XML error: {0}")]
    XmlRead(#[from] quick_xml::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl CourseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CourseError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
