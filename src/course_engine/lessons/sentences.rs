use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::course_engine::{
    error::{CourseError, Result},
    layout::upper_char,
    lessons::LessonContext,
    models::Lesson,
    plan::SentenceSpec,
};

/// Characters a sentence may consist of.
fn allowed_characters(ctx: &LessonContext, spec: &SentenceSpec) -> HashSet<char> {
    match &spec.characters {
        Some(set) => set.resolve(ctx.layout, ctx.progress.stage).chars().collect(),
        None => {
            let introduced = ctx.layout.stages.introduced(ctx.progress.stage);
            let mut allowed: HashSet<char> = introduced.iter().copied().collect();
            allowed.extend(introduced.iter().map(|&c| upper_char(c)));
            allowed.insert(' ');
            allowed
        }
    }
}

/// Sentences typable with the allowed characters, in corpus order.
pub fn eligible<'c>(ctx: &LessonContext<'c>, spec: &SentenceSpec) -> Vec<&'c str> {
    let allowed = allowed_characters(ctx, spec);
    let required: Option<HashSet<char>> = spec.must_contain.as_ref().map(|set| {
        set.resolve(ctx.layout, ctx.progress.stage)
            .chars()
            .flat_map(|c| [c, upper_char(c)])
            .collect()
    });

    ctx.corpus
        .sentences
        .iter()
        .filter(|s| spec.max_length.map_or(true, |max| s.length <= max))
        .filter(|s| !s.text.is_empty() && s.text.chars().all(|c| allowed.contains(&c)))
        .filter(|s| match &required {
            Some(required) => s.text.chars().any(|c| required.contains(&c)),
            None => true,
        })
        .map(|s| s.text.as_str())
        .collect()
}

/// Draw `spec.count` distinct sentences, one per line.
pub fn generate<R: Rng>(rng: &mut R, ctx: &LessonContext, lesson: &mut Lesson, spec: &SentenceSpec) -> Result<()> {
    let mut candidates = eligible(ctx, spec);
    debug!(eligible = candidates.len(), requested = spec.count, "sampling sentences");

    if spec.count > candidates.len() {
        return Err(CourseError::NotEnoughSentences {
            requested: spec.count,
            available: candidates.len(),
        });
    }

    let (sample, _) = candidates.partial_shuffle(rng, spec.count);
    lesson.put_text(sample.join("\n"), spec.append);
    Ok(())
}
