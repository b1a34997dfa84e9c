//! Word drills built from the frequency-ranked word list.
//!
//! Selection runs the filters in a fixed order: stage scope, length bounds,
//! all-caps exclusion, case handling, start letters, de-duplication and
//! finally the skip offset. The surviving words keep their frequency order and
//! are laid out by [`repeat_tokens`].

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::course_engine::{
    error::{CourseError, Result},
    lessons::LessonContext,
    models::{CorpusRecord, Lesson},
    plan::{WordSegment, WordSpec},
    repeat::repeat_tokens,
};

fn in_scope(record: &CorpusRecord, ctx: &LessonContext, spec: &WordSpec) -> bool {
    if spec.newest_stage_only {
        record.introduced_at(ctx.progress.stage)
    } else {
        record.reachable_by(ctx.progress.stage)
    }
}

fn in_length(record: &CorpusRecord, spec: &WordSpec) -> bool {
    record.length >= spec.min_length && spec.max_length.map_or(true, |max| record.length <= max)
}

/// Apply the case rule: before uppercase is taught words are lowercased,
/// afterwards only words that already are lowercase are kept.
fn with_case(text: &str, spec: &WordSpec, uppercase_learned: bool) -> Option<String> {
    if !spec.lowercase {
        return Some(text.to_string());
    }
    let lower = text.to_lowercase();
    if !uppercase_learned {
        Some(lower)
    } else if lower == text {
        Some(lower)
    } else {
        None
    }
}

pub fn select(ctx: &LessonContext, spec: &WordSpec) -> Vec<String> {
    let start_letters: Option<HashSet<char>> = spec
        .start_letters
        .as_ref()
        .map(|set| set.resolve(ctx.layout, ctx.progress.stage).chars().collect());
    let mut seen = HashSet::new();

    ctx.corpus
        .words
        .iter()
        .filter(|r| in_scope(r, ctx, spec))
        .filter(|r| in_length(r, spec))
        .filter(|r| !spec.exclude_all_caps || r.text != r.text.to_uppercase())
        .filter_map(|r| with_case(&r.text, spec, ctx.progress.uppercase_learned))
        .filter(|word| match &start_letters {
            Some(letters) => word.chars().next().map_or(false, |c| letters.contains(&c)),
            None => true,
        })
        .filter(|word| !spec.drop_duplicates || seen.insert(word.clone()))
        .skip(spec.skip)
        .collect()
}

pub fn generate<R: Rng>(rng: &mut R, ctx: &LessonContext, lesson: &mut Lesson, spec: &WordSpec) -> Result<()> {
    let words = select(ctx, spec);
    debug!(count = words.len(), "words selected");

    let text = repeat_tokens(rng, &words, &spec.repetition)
        .ok_or_else(|| CourseError::EmptySelection { lesson: lesson.title.clone() })?;
    lesson.put_text(text, spec.append);
    Ok(())
}

/// Several word drills in a row, each with its own repetition, line count
/// and length bounds. Only the first part may replace the text.
pub fn generate_segments<R: Rng>(
    rng: &mut R,
    ctx: &LessonContext,
    lesson: &mut Lesson,
    segments: &[WordSegment],
    spec: &WordSpec,
) -> Result<()> {
    let mut append = spec.append;
    if !append {
        lesson.text.clear();
    }

    for segment in segments {
        let mut part = spec.clone();
        part.repetition.repeats = segment.repeats;
        part.repetition.line_count = segment.lines;
        part.min_length = segment.min_length;
        part.max_length = segment.max_length;
        part.append = append;
        generate(rng, ctx, lesson, &part)?;
        append = true;
    }
    Ok(())
}
