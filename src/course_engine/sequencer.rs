//! Executes a course plan step by step.
//!
//! The sequencer owns the only mutable state of a run: the progress context
//! (newest stage, uppercase flag), the position in the reference course and
//! the list of finished lessons. Each [`LessonPlan`] goes through the same
//! fixed order:
//!
//! 1. pick the reference lesson (explicit index, or the one after the last)
//! 2. introduce the next stage and record its characters
//! 3. override the new characters
//! 4. keep and translate a limited number of reference lines
//! 5. translate short title words
//! 6. run the content generator
//! 7. override the title
//! 8. run the follow-up generator
//! 9. seal the lesson

use rand::Rng;
use tracing::{debug, info};

use crate::course_engine::{
    corpus::CorpusTables,
    error::{CourseError, Result},
    layout::{has_case, upper_char, Layout},
    lessons::{self, reference, LessonContext, Progress},
    models::{Lesson, ReferenceLesson},
    plan::{LessonPlan, Step},
};

pub struct Sequencer<'a, R: Rng> {
    corpus: &'a CorpusTables,
    layout: &'a Layout,
    reference: &'a [ReferenceLesson],
    rng: R,
    progress: Progress,
    reference_index: Option<usize>,
    lessons: Vec<Lesson>,
}

impl<'a, R: Rng> Sequencer<'a, R> {
    pub fn new(corpus: &'a CorpusTables, layout: &'a Layout, reference: &'a [ReferenceLesson], rng: R) -> Self {
        Sequencer {
            corpus,
            layout,
            reference,
            rng,
            progress: Progress::default(),
            reference_index: None,
            lessons: Vec::new(),
        }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn into_lessons(self) -> Vec<Lesson> {
        self.lessons
    }

    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for step in steps {
            self.step(step)?;
        }
        info!(lessons = self.lessons.len(), "course plan finished");
        Ok(())
    }

    pub fn step(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Lesson(plan) => self.lesson(plan),
            Step::LearnUppercase => {
                self.progress.uppercase_learned = true;
                Ok(())
            }
        }
    }

    /// Characters introduced by `stage`, plus their uppercase forms once
    /// uppercase has been taught.
    fn stage_characters(&self, stage: usize) -> String {
        let chars = self.layout.stages.stage(stage);
        let mut out: String = chars.iter().collect();
        if self.progress.uppercase_learned {
            out.extend(chars.iter().filter(|&&c| c != 'ß' && has_case(c)).map(|&c| upper_char(c)));
        }
        out
    }

    fn advance_stage(&mut self) -> Result<usize> {
        let next = self.progress.stage.map_or(0, |s| s + 1);
        if next >= self.layout.stages.len() {
            return Err(CourseError::LayoutMismatch(format!(
                "the plan introduces stage {} but the layout only has {}",
                next + 1,
                self.layout.stages.len()
            )));
        }
        self.progress.stage = Some(next);
        Ok(next)
    }

    fn lesson(&mut self, plan: &LessonPlan) -> Result<()> {
        let index = plan
            .reference
            .unwrap_or_else(|| self.reference_index.map_or(0, |i| i + 1));
        let course = self.reference;
        let source = course.get(index).ok_or(CourseError::MissingReferenceLesson {
            index,
            available: course.len(),
        })?;
        self.reference_index = Some(index);

        let mut lesson = Lesson::from_reference(source);

        if plan.new_stage {
            let stage = self.advance_stage()?;
            lesson.new_characters = self.stage_characters(stage);
        }

        let ctx = LessonContext {
            corpus: self.corpus,
            layout: self.layout,
            reference: source,
            progress: self.progress,
        };

        if let Some(letters) = &plan.new_characters {
            lesson.new_characters = letters.resolve(self.layout, self.progress.stage);
        }
        if let Some(lines) = plan.translated_lines {
            reference::limit_and_translate(&ctx, &mut lesson, lines);
        }
        if let Some(word_length) = plan.title_word_length {
            reference::translate_title(&ctx, &mut lesson, word_length);
        }

        lessons::apply(&mut self.rng, &ctx, &mut lesson, &plan.content)?;

        if let Some(title) = &plan.title {
            lesson.title = title.clone();
        }
        if let Some(follow_up) = &plan.follow_up {
            lessons::apply(&mut self.rng, &ctx, &mut lesson, follow_up)?;
        }

        debug!(
            number = self.lessons.len() + 1,
            reference = index,
            title = %lesson.title,
            new_characters = %lesson.new_characters,
            lines = lesson.line_count(),
            "lesson finished"
        );
        self.lessons.push(lesson);
        Ok(())
    }
}

/// Run `steps` against the reference course and return the finished lessons.
pub fn generate_lessons<R: Rng>(
    corpus: &CorpusTables,
    layout: &Layout,
    reference: &[ReferenceLesson],
    steps: &[Step],
    rng: R,
) -> Result<Vec<Lesson>> {
    let mut sequencer = Sequencer::new(corpus, layout, reference, rng);
    sequencer.run(steps)?;
    Ok(sequencer.into_lessons())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course_engine::{
        corpus::build_table,
        plan::{Content, LessonPlan, WordSpec},
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_lessons() -> Vec<ReferenceLesson> {
        (0..4)
            .map(|i| ReferenceLesson {
                title: format!("Lektion {i}: a und r"),
                new_characters: format!("#{i}"),
                text: "ar ra\nrr aa\nar".to_string(),
            })
            .collect()
    }

    fn layout() -> Layout {
        Layout::new("en it", "en ar", "lr lr", ",.ß").unwrap()
    }

    fn corpus(layout: &Layout) -> CorpusTables {
        let rows = vec![("nie".to_string(), Some(9)), ("nett".to_string(), Some(5)), ("en".to_string(), Some(3))];
        CorpusTables { words: build_table(rows, &layout.stages, 0), ..Default::default() }
    }

    #[test]
    fn stages_advance_only_on_request() {
        let layout = layout();
        let corpus = corpus(&layout);
        let reference = reference_lessons();
        let mut seq = Sequencer::new(&corpus, &layout, &reference, StdRng::seed_from_u64(1));

        seq.step(&LessonPlan::new(Content::LetterTranslate).new_stage().into()).unwrap();
        assert_eq!(seq.progress().stage, Some(0));
        seq.step(&LessonPlan::new(Content::LetterTranslate).into()).unwrap();
        assert_eq!(seq.progress().stage, Some(0));
        seq.step(&Step::LearnUppercase).unwrap();
        seq.step(&LessonPlan::new(Content::LetterTranslate).new_stage().into()).unwrap();

        let lessons = seq.lessons();
        assert_eq!(lessons[0].new_characters, "en");
        assert_eq!(lessons[1].new_characters, "");
        assert_eq!(lessons[2].new_characters, "itIT");
        assert_eq!(lessons[0].text, "it ti\ntt ii\nit");
        assert_eq!(lessons[0].title, "Lektion 0: i und t");
    }

    #[test]
    fn explicit_reference_index_resets_the_pointer() {
        let layout = layout();
        let corpus = corpus(&layout);
        let reference = reference_lessons();
        let steps: Vec<Step> = vec![
            LessonPlan::new(Content::Copy).reference(2).into(),
            LessonPlan::new(Content::Copy).reference(0).into(),
            LessonPlan::new(Content::Copy).into(),
        ];
        let lessons = generate_lessons(&corpus, &layout, &reference, &steps, StdRng::seed_from_u64(1)).unwrap();
        let copied: Vec<&str> = lessons.iter().map(|l| l.new_characters.as_str()).collect();
        assert_eq!(copied, ["#2", "#0", "#1"]);
    }

    #[test]
    fn limited_translation_then_appended_words() {
        let layout = layout();
        let corpus = corpus(&layout);
        let reference = reference_lessons();
        let steps: Vec<Step> = vec![
            LessonPlan::new(Content::LetterTranslate).new_stage().into(),
            LessonPlan::new(Content::Words(WordSpec::new(2, 2).plain().newest_stage_only().append()))
                .new_stage()
                .translated_lines(1)
                .title("Wir üben")
                .into(),
        ];
        let lessons = generate_lessons(&corpus, &layout, &reference, &steps, StdRng::seed_from_u64(1)).unwrap();
        let lines: Vec<&str> = lessons[1].text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "it ti");
        assert!(lines[1].starts_with("nie nie nett nett"));
        assert_eq!(lessons[1].title, "Wir üben");
    }

    #[test]
    fn running_past_the_reference_course_fails() {
        let layout = layout();
        let corpus = corpus(&layout);
        let reference = reference_lessons();
        let steps: Vec<Step> = vec![LessonPlan::new(Content::Copy).reference(4).into()];
        let err = generate_lessons(&corpus, &layout, &reference, &steps, StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, CourseError::MissingReferenceLesson { index: 4, available: 4 }));
    }

    #[test]
    fn introducing_more_stages_than_the_layout_has_fails() {
        let layout = layout();
        let corpus = corpus(&layout);
        let reference = reference_lessons();
        let steps: Vec<Step> = (0..3).map(|_| LessonPlan::new(Content::LetterTranslate).new_stage().into()).collect();
        let err = generate_lessons(&corpus, &layout, &reference, &steps, StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, CourseError::LayoutMismatch(_)));
    }
}
