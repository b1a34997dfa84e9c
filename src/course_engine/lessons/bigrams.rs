use rand::Rng;
use tracing::debug;

use crate::course_engine::{
    error::{CourseError, Result},
    lessons::LessonContext,
    models::{CorpusRecord, Lesson},
    plan::BigramSpec,
    repeat::repeat_tokens,
};

/// Does `letter` occur in `text` followed by a different character?
fn leads_to_other(text: &str, letter: char) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).any(|w| w[0] == letter && w[1] != letter)
}

/// For every introduced letter, the most frequent reachable n-grams that
/// move from that letter to a different one. Selections are concatenated
/// letter by letter, so an n-gram may appear more than once.
pub fn select(ctx: &LessonContext, spec: &BigramSpec) -> Vec<String> {
    let stage = ctx.progress.stage;
    let reachable: Vec<&CorpusRecord> = ctx.corpus.bigrams.iter().filter(|r| r.reachable_by(stage)).collect();

    let mut selection = Vec::new();
    for letter in ctx.layout.stages.introduced(stage) {
        selection.extend(
            reachable
                .iter()
                .filter(|r| leads_to_other(&r.text, letter))
                .take(spec.per_letter)
                .map(|r| r.text.clone()),
        );
    }
    selection
}

pub fn generate<R: Rng>(rng: &mut R, ctx: &LessonContext, lesson: &mut Lesson, spec: &BigramSpec) -> Result<()> {
    let selection = select(ctx, spec);
    debug!(count = selection.len(), "bigrams selected");

    lesson.text = repeat_tokens(rng, &selection, &spec.repetition)
        .ok_or_else(|| CourseError::EmptySelection { lesson: lesson.title.clone() })?;
    Ok(())
}
