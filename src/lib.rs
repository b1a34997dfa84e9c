//! # typing_course_gen
//!
//! Generates a typing-tutor course for a new keyboard layout from an existing
//! course for a reference layout and a frequency-ranked text corpus.
//!
//! ## How it works
//!
//! 1. The layout is described as pairs of keys in order of introduction
//!    (stages). Every word, sentence and bigram of the corpus is annotated
//!    with the earliest stage at which it can be typed.
//! 2. A lesson plan walks the reference course lesson by lesson. Each lesson
//!    either translates the reference text into the new layout's key
//!    positions, copies it, or generates fresh drills from corpus entries
//!    that are typable with the stages introduced so far.
//! 3. The finished lessons are written as a course file the typing tutor
//!    can import.
//!
//! ## Key features
//!
//! - **Deterministic**: set `seed` in the configuration (or `--seed`) to get
//!   the same course on every run.
//! - **Plans as data**: [`reference_course_plan`] is a plain list of
//!   [`Step`]s; custom plans run through the same [`Sequencer`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use typing_course_gen::{generate_course, write_course, CourseConfig};
//!
//! let config = CourseConfig { seed: Some(42), ..CourseConfig::default() };
//! let course = generate_course(&config)?;
//! write_course(config.output_path(), &course)?;
//!
//! for lesson in &course.lessons {
//!     println!("{} ({} lines)", lesson.title, lesson.line_count());
//! }
//! # Ok::<(), typing_course_gen::CourseError>(())
//! ```

pub mod course_engine;

pub use course_engine::{
    build_course, generate_course, generate_lessons, make_rng, read_reference_course,
    reference_course_plan, write_course, Content, Course, CourseConfig, CourseError, CourseInfo,
    CourseSummary, CorpusTables, Hand, Layout, Lesson, LessonPlan, LetterSet, LetterSource,
    ReferenceLesson, Result, Sequencer, Step,
};

#[cfg(test)]
mod tests;
