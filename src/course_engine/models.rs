use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Corpus records
// ---------------------------------------------------------------------------

/// One row of a word, sentence or n-gram table.
///
/// Built once when the corpus is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    pub text: String,
    /// Frequency count; `None` for the (unranked) sentence table.
    pub count: Option<u64>,
    pub characters: BTreeSet<char>,
    /// Length in chars, not bytes.
    pub length: usize,
    /// Earliest stage at which the record becomes typable.
    /// `None` means no stage of the layout covers it.
    pub group: Option<usize>,
}

impl CorpusRecord {
    /// Is the record typable once stages `0..=stage` have been introduced?
    pub fn reachable_by(&self, stage: Option<usize>) -> bool {
        matches!((self.group, stage), (Some(g), Some(s)) if g <= s)
    }

    /// Does the record become typable exactly at `stage`?
    pub fn introduced_at(&self, stage: Option<usize>) -> bool {
        matches!((self.group, stage), (Some(g), Some(s)) if g == s)
    }
}

// ---------------------------------------------------------------------------
// Layout metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn from_char(c: char) -> Option<Hand> {
        match c {
            'l' | 'L' => Some(Hand::Left),
            'r' | 'R' => Some(Hand::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Left  => write!(f, "left"),
            Hand::Right => write!(f, "right"),
        }
    }
}

// ---------------------------------------------------------------------------
// Lessons and course
// ---------------------------------------------------------------------------

/// A lesson as read from the reference course file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLesson {
    pub title: String,
    pub new_characters: String,
    pub text: String,
}

/// A lesson of the generated course.
///
/// Mutated by the sequencer and the generators until it is sealed into
/// [`Course::lessons`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub new_characters: String,
    pub text: String,
}

impl Lesson {
    /// Start a lesson from the reference lesson's title and text.
    pub fn from_reference(reference: &ReferenceLesson) -> Self {
        Lesson {
            title: reference.title.clone(),
            new_characters: String::new(),
            text: reference.text.clone(),
        }
    }

    /// Replace the text, or append it on a new line.
    pub fn put_text(&mut self, text: String, append: bool) {
        if append {
            self.text.push('\n');
            self.text.push_str(&text);
        } else {
            self.text = text;
        }
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Course metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseInfo {
    pub title: String,
    pub description: String,
    pub keyboard_layout: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub info: CourseInfo,
    pub lessons: Vec<Lesson>,
}

/// Per-lesson overview printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct LessonSummary {
    pub title: String,
    pub new_characters: String,
    pub lines: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub title: String,
    pub keyboard_layout: String,
    pub lessons: Vec<LessonSummary>,
}

impl Course {
    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            title: self.info.title.clone(),
            keyboard_layout: self.info.keyboard_layout.clone(),
            lessons: self
                .lessons
                .iter()
                .map(|l| LessonSummary {
                    title: l.title.clone(),
                    new_characters: l.new_characters.clone(),
                    lines: l.line_count(),
                })
                .collect(),
        }
    }
}
