//! Lesson content generators.
//!
//! Every generator reads the shared corpus tables and the progress context
//! and writes one lesson's text (or title / new characters). They follow the
//! same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     ctx: &LessonContext,
//!     lesson: &mut Lesson,
//!     spec: &<Spec>,
//! ) -> Result<()>
//! ```
//!
//! [`apply`] dispatches a [`Content`] to the right module.

/// Letter translation, copies and title edits of the reference lesson.
pub mod reference;
/// Frequent two-letter combinations of the introduced letters.
pub mod bigrams;
/// Frequency-ranked word drills, single or multi-part.
pub mod words;
/// Randomly sampled corpus sentences.
pub mod sentences;

use rand::Rng;

use crate::course_engine::{
    corpus::CorpusTables,
    error::Result,
    layout::Layout,
    models::{Lesson, ReferenceLesson},
    plan::Content,
};

/// Sequencer state visible to the generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Most recently introduced stage; `None` before the first one.
    pub stage: Option<usize>,
    pub uppercase_learned: bool,
}

/// Read-only inputs of one lesson.
#[derive(Debug, Clone, Copy)]
pub struct LessonContext<'a> {
    pub corpus: &'a CorpusTables,
    pub layout: &'a Layout,
    pub reference: &'a ReferenceLesson,
    pub progress: Progress,
}

/// Run one content generator on `lesson`.
pub fn apply<R: Rng>(rng: &mut R, ctx: &LessonContext, lesson: &mut Lesson, content: &Content) -> Result<()> {
    match content {
        Content::LetterTranslate => reference::letter_translate(ctx, lesson),
        Content::Copy => reference::copy(ctx, lesson),
        Content::TranslateTitle(word_length) => reference::translate_title(ctx, lesson, *word_length),
        Content::ReplaceTitle { from, to } => reference::replace_title(lesson, from, to),
        Content::Bigrams(spec) => bigrams::generate(rng, ctx, lesson, spec)?,
        Content::Words(spec) => words::generate(rng, ctx, lesson, spec)?,
        Content::WordSegments { segments, spec } => words::generate_segments(rng, ctx, lesson, segments, spec)?,
        Content::Sentences(spec) => sentences::generate(rng, ctx, lesson, spec)?,
    }
    Ok(())
}
