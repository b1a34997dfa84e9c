//! The course plan: an ordered list of steps the sequencer executes.
//!
//! Every lesson is one [`LessonPlan`]: which reference lesson it starts from,
//! the optional pre-processing (new stage, line-limited translation, title
//! translation), exactly one [`Content`] generator, and an optional follow-up
//! for lessons built in two parts. Letter sets that depend on the progress so
//! far are described by [`LetterSet`] and resolved when the lesson runs.

use crate::course_engine::{
    layout::{upper_char, Layout},
    models::Hand,
    repeat::Repetition,
};

// ---------------------------------------------------------------------------
// Letter sets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LetterSource {
    Literal(String),
    /// Characters of the most recently introduced stage.
    NewestStage,
    /// Every character introduced so far.
    IntroducedStages,
    /// Uppercase letters typed by one hand among those introduced so far.
    HandUpper(Hand),
    /// Uppercase form of one character of a given stage.
    StageLetterUpper { stage: usize, position: usize },
}

/// A set of characters computed from the current progress.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterSet(pub Vec<LetterSource>);

impl LetterSet {
    pub fn newest_stage() -> Self {
        LetterSet(vec![LetterSource::NewestStage])
    }

    pub fn hand_upper(hand: Hand) -> Self {
        LetterSet(vec![LetterSource::HandUpper(hand)])
    }

    pub fn literal(chars: &str) -> Self {
        LetterSet(vec![LetterSource::Literal(chars.to_string())])
    }

    pub fn and(mut self, source: LetterSource) -> Self {
        self.0.push(source);
        self
    }

    pub fn resolve(&self, layout: &Layout, stage: Option<usize>) -> String {
        let mut out = String::new();
        for source in &self.0 {
            match source {
                LetterSource::Literal(s) => out.push_str(s),
                LetterSource::NewestStage => {
                    if let Some(s) = stage {
                        out.extend(layout.stages.stage(s));
                    }
                }
                LetterSource::IntroducedStages => out.extend(layout.stages.introduced(stage)),
                LetterSource::HandUpper(hand) => out.push_str(&layout.letters_for_hand(stage, *hand, true)),
                LetterSource::StageLetterUpper { stage, position } => {
                    if let Some(&c) = layout.stages.stage(*stage).get(*position) {
                        out.push(upper_char(c));
                    }
                }
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Generator parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BigramSpec {
    /// How many n-grams to take per introduced letter.
    pub per_letter: usize,
    pub repetition: Repetition,
}

impl Default for BigramSpec {
    fn default() -> Self {
        BigramSpec { per_letter: 4, repetition: Repetition::new(9, 59, 29) }
    }
}

/// Word selection and layout for a word lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpec {
    /// Only words that become typable with the newest stage.
    pub newest_stage_only: bool,
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub start_letters: Option<LetterSet>,
    /// Drop words that do not change when uppercased (acronyms, numbers).
    pub exclude_all_caps: bool,
    /// Lowercase words before uppercase is taught, keep only lowercase ones after.
    pub lowercase: bool,
    pub drop_duplicates: bool,
    pub skip: usize,
    pub repetition: Repetition,
    pub append: bool,
}

impl WordSpec {
    pub fn new(repeats: usize, lines: usize) -> Self {
        WordSpec {
            newest_stage_only: false,
            min_length: 0,
            max_length: None,
            start_letters: None,
            exclude_all_caps: false,
            lowercase: false,
            drop_duplicates: true,
            skip: 0,
            repetition: Repetition::new(repeats, 60, lines),
            append: false,
        }
    }

    pub fn lengths(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = Some(max);
        self
    }

    pub fn newest_stage_only(mut self) -> Self {
        self.newest_stage_only = true;
        self
    }

    pub fn no_all_caps(mut self) -> Self {
        self.exclude_all_caps = true;
        self
    }

    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    /// Shorthand for the common `no_all_caps().lowercase()` pair.
    pub fn plain(self) -> Self {
        self.no_all_caps().lowercase()
    }

    pub fn starting_with(mut self, letters: LetterSet) -> Self {
        self.start_letters = Some(letters);
        self
    }

    pub fn starting_with_newest(self) -> Self {
        self.starting_with(LetterSet::newest_stage())
    }

    pub fn punctuate(mut self, marks: &str, probability: f64) -> Self {
        self.repetition.punctuation = marks.to_string();
        self.repetition.punctuation_probability = probability;
        self
    }

    pub fn punctuation_probability(mut self, probability: f64) -> Self {
        self.repetition.punctuation_probability = probability;
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn append(mut self) -> Self {
        self.append = true;
        self
    }
}

/// One part of a multi-part word lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSegment {
    pub repeats: usize,
    pub lines: usize,
    pub min_length: usize,
    pub max_length: Option<usize>,
}

impl WordSegment {
    pub fn new(repeats: usize, lines: usize, min_length: usize, max_length: usize) -> Self {
        WordSegment { repeats, lines, min_length, max_length: Some(max_length) }
    }

    pub fn unbounded(repeats: usize, lines: usize) -> Self {
        WordSegment { repeats, lines, min_length: 0, max_length: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentenceSpec {
    pub count: usize,
    pub max_length: Option<usize>,
    /// Allowed characters; defaults to the introduced letters, their
    /// uppercase forms and space.
    pub characters: Option<LetterSet>,
    /// At least one of these characters (or its uppercase form) must occur.
    ///
    /// An explicit letter set narrows the pool as well, so a lesson such as
    /// the right-shift sentences draws only sentences with a left-hand
    /// capital and may run out on a small corpus.
    pub must_contain: Option<LetterSet>,
    pub append: bool,
}

impl SentenceSpec {
    pub fn new(count: usize) -> Self {
        SentenceSpec { count, max_length: None, characters: None, must_contain: None, append: false }
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn characters(mut self, letters: LetterSet) -> Self {
        self.characters = Some(letters);
        self
    }

    pub fn must_contain(mut self, letters: LetterSet) -> Self {
        self.must_contain = Some(letters);
        self
    }

    /// Require a letter of the newest stage, in either case.
    pub fn must_contain_newest(self) -> Self {
        self.must_contain(LetterSet::newest_stage())
    }

    pub fn append(mut self) -> Self {
        self.append = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Lessons and steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Reference text passed through the translation table.
    LetterTranslate,
    Bigrams(BigramSpec),
    Words(WordSpec),
    WordSegments { segments: Vec<WordSegment>, spec: WordSpec },
    Sentences(SentenceSpec),
    /// Keep the reference lesson, including its new characters.
    Copy,
    /// Translate title words of the given length.
    TranslateTitle(usize),
    ReplaceTitle { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonPlan {
    /// Reference lesson to start from; `None` takes the one after the
    /// previous lesson's.
    pub reference: Option<usize>,
    pub new_stage: bool,
    pub new_characters: Option<LetterSet>,
    /// Keep and translate only this many lines of the reference text.
    pub translated_lines: Option<usize>,
    pub title_word_length: Option<usize>,
    pub content: Content,
    pub title: Option<String>,
    pub follow_up: Option<Content>,
}

impl LessonPlan {
    pub fn new(content: Content) -> Self {
        LessonPlan {
            reference: None,
            new_stage: false,
            new_characters: None,
            translated_lines: None,
            title_word_length: Some(1),
            content,
            title: None,
            follow_up: None,
        }
    }

    pub fn reference(mut self, index: usize) -> Self {
        self.reference = Some(index);
        self
    }

    pub fn new_stage(mut self) -> Self {
        self.new_stage = true;
        self
    }

    pub fn new_characters(mut self, letters: LetterSet) -> Self {
        self.new_characters = Some(letters);
        self
    }

    pub fn translated_lines(mut self, lines: usize) -> Self {
        self.translated_lines = Some(lines);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn then(mut self, follow_up: Content) -> Self {
        self.follow_up = Some(follow_up);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Lesson(LessonPlan),
    /// From here on uppercase letters count as taught.
    LearnUppercase,
}

impl From<LessonPlan> for Step {
    fn from(plan: LessonPlan) -> Self {
        Step::Lesson(plan)
    }
}
