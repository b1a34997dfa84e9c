//! The lesson plan for courses derived from "Deutsches Neo 2".
//!
//! Lesson numbers in the comments are the reference course's. The plan
//! introduces one stage (key pair) at a time, moves from home-row drills to
//! frequent words, adds comma and period, then both shift keys, and finally
//! copies the layout-independent lessons (digits, special characters, test
//! texts). Lesson 56 is copied after the stage lessons 57 to 59 so the
//! spelling lesson follows the last new letters.

use crate::course_engine::{
    models::Hand,
    plan::{
        BigramSpec, Content, LessonPlan, LetterSet, LetterSource, SentenceSpec, Step, WordSegment,
        WordSpec,
    },
};

fn lesson(content: Content) -> LessonPlan {
    LessonPlan::new(content)
}

fn words(spec: WordSpec) -> Content {
    Content::Words(spec)
}

fn segments(segments: &[WordSegment], spec: WordSpec) -> Content {
    Content::WordSegments { segments: segments.to_vec(), spec }
}

fn sentences(spec: SentenceSpec) -> Content {
    Content::Sentences(spec)
}

fn replace_title(from: &str, to: &str) -> Content {
    Content::ReplaceTitle { from: from.to_string(), to: to.to_string() }
}

fn seg(repeats: usize, lines: usize, min: usize, max: usize) -> WordSegment {
    WordSegment::new(repeats, lines, min, max)
}

/// Letters of the newest stage plus everything introduced before.
fn hand_and_introduced(hand: Hand) -> LetterSet {
    LetterSet::hand_upper(hand).and(LetterSource::IntroducedStages)
}

/// Word drill restricted to the newest stage, lowercase, no acronyms.
fn newest(repeats: usize, lines: usize) -> WordSpec {
    WordSpec::new(repeats, lines).plain().newest_stage_only()
}

pub fn reference_course_plan() -> Vec<Step> {
    let mut plan: Vec<Step> = Vec::new();
    let mut push = |l: LessonPlan| plan.push(Step::Lesson(l));

    // 0-3: the home row, one finger pair at a time
    for _ in 0..4 {
        push(lesson(Content::LetterTranslate).new_stage());
    }
    // 4: home row, title spells out all eight letters
    push(lesson(Content::LetterTranslate).then(Content::TranslateTitle(4)));
    // 5
    push(lesson(Content::LetterTranslate));
    // 6: syllables of two letters
    push(lesson(Content::Bigrams(BigramSpec::default())));
    // 7: syllables of three letters
    push(lesson(words(WordSpec::new(12, 15).lengths(3, 3).plain())));
    // 8
    push(lesson(Content::LetterTranslate));
    // 9: replaces the poem, which cannot be translated
    push(lesson(words(WordSpec::new(1, 10).plain())).title("Sicherheitstest der Grundstellung"));

    // 10-12: middle fingers, upper row
    push(lesson(Content::LetterTranslate).new_stage());
    push(lesson(segments(
        &[seg(6, 8, 3, 3), seg(2, 3, 3, 3), seg(4, 7, 4, 4), seg(3, 3, 5, 5)],
        newest(1, 1),
    )));
    push(
        lesson(segments(&[seg(2, 4, 3, 3), seg(2, 4, 4, 4), seg(2, 10, 5, 6)], newest(1, 1).append()))
            .translated_lines(9),
    );

    // 13-15
    push(lesson(words(newest(4, 6).lengths(4, 4).append())).new_stage().translated_lines(10));
    push(lesson(words(newest(1, 19).starting_with_newest())));
    push(lesson(words(newest(1, 20))));

    // 16-18
    push(
        lesson(segments(&[seg(4, 5, 4, 4), seg(4, 3, 3, 3), seg(4, 7, 4, 7)], newest(1, 1).append()))
            .new_stage()
            .translated_lines(12),
    );
    push(lesson(words(newest(3, 22))));
    push(lesson(words(newest(1, 19))));

    // 19-21
    push(lesson(Content::LetterTranslate).new_stage().then(replace_title("Konsonanten", "Buchstaben")));
    push(lesson(words(newest(2, 16).starting_with_newest())));
    push(lesson(words(newest(1, 25))));

    // 22-24
    push(lesson(words(newest(2, 16).starting_with_newest().append())).new_stage().translated_lines(12));
    push(lesson(words(newest(2, 26))));
    push(lesson(words(newest(1, 33))));

    // 25-27
    push(lesson(words(newest(3, 24).starting_with_newest().append())).new_stage().translated_lines(11));
    push(lesson(words(newest(3, 34))));
    push(lesson(words(newest(1, 36))));

    // 28-29: review
    push(lesson(words(WordSpec::new(1, 45).plain())));
    push(lesson(Content::LetterTranslate));

    // 30-31: comma
    push(
        lesson(segments(
            &[seg(4, 7, 2, 4), WordSegment::unbounded(1, 12)],
            WordSpec::new(1, 1).plain().punctuate(",", 1.0).append(),
        ))
        .new_stage()
        .translated_lines(3),
    );
    push(lesson(words(WordSpec::new(1, 41).plain().punctuate(",", 1.0).skip(100))));

    // 32-33: period
    push(
        lesson(segments(
            &[seg(4, 7, 2, 4), WordSegment::unbounded(1, 4)],
            WordSpec::new(1, 1).plain().punctuate(".", 1.0).append().skip(200),
        ))
        .new_stage()
        .translated_lines(3),
    );
    push(lesson(words(WordSpec::new(1, 24).plain().punctuate(".", 1.0).skip(300))));

    // 34-35
    push(lesson(words(WordSpec::new(1, 32).plain().punctuation_probability(1.0).skip(400))));
    push(lesson(words(WordSpec::new(1, 71).plain().punctuation_probability(0.1).append())).translated_lines(4));

    // 36-38: left shift, uppercase letters of the right hand
    push(
        lesson(words(WordSpec::new(4, 14).no_all_caps().starting_with(LetterSet::hand_upper(Hand::Right)).append()))
            .new_characters(LetterSet::hand_upper(Hand::Right))
            .translated_lines(13),
    );
    push(lesson(words(WordSpec::new(1, 34).no_all_caps().starting_with(hand_and_introduced(Hand::Right)).skip(500))));
    push(lesson(sentences(
        SentenceSpec::new(47).max_length(40).characters(
            LetterSet::hand_upper(Hand::Right)
                .and(LetterSource::Literal(" ".to_string()))
                .and(LetterSource::IntroducedStages),
        ),
    )));

    // 39-41: right shift, uppercase letters of the left hand
    push(
        lesson(words(WordSpec::new(4, 14).no_all_caps().starting_with(LetterSet::hand_upper(Hand::Left)).append()))
            .new_characters(LetterSet::hand_upper(Hand::Left))
            .translated_lines(13),
    );
    push(lesson(words(WordSpec::new(1, 34).no_all_caps().starting_with(hand_and_introduced(Hand::Left)).skip(600))));
    push(lesson(sentences(
        SentenceSpec::new(47).max_length(40).must_contain(LetterSet::hand_upper(Hand::Left)),
    )));

    plan.push(Step::LearnUppercase);
    let mut push = |l: LessonPlan| plan.push(Step::Lesson(l));

    // 42
    push(
        lesson(words(
            WordSpec::new(1, 16).starting_with(LetterSet::hand_upper(Hand::Right).and(LetterSource::HandUpper(Hand::Left))),
        ))
        .then(sentences(SentenceSpec::new(20).max_length(60).append())),
    );

    // 43-45
    push(lesson(words(newest(3, 11).starting_with_newest().append())).new_stage().translated_lines(9));
    push(lesson(words(
        WordSpec::new(1, 23).no_all_caps().newest_stage_only().starting_with_newest().punctuation_probability(0.2),
    )));
    push(
        lesson(words(WordSpec::new(1, 8).starting_with_newest().punctuation_probability(1.0)))
            .then(sentences(SentenceSpec::new(21).max_length(60).must_contain_newest().append())),
    );

    // 46-48: umlauts
    push(
        lesson(words(WordSpec::new(1, 19).no_all_caps().newest_stage_only().append()))
            .new_stage()
            .translated_lines(8)
            .then(replace_title("Umlaute", "Buchstaben")),
    );
    push(
        lesson(words(WordSpec::new(1, 18).no_all_caps().newest_stage_only().punctuation_probability(1.0)))
            .then(sentences(SentenceSpec::new(16).max_length(60).must_contain_newest().append())),
    );
    push(lesson(sentences(SentenceSpec::new(21).max_length(60).must_contain_newest())));

    // 49-51
    push(lesson(words(newest(3, 7).append())).new_stage().translated_lines(7));
    push(lesson(words(WordSpec::new(1, 18).no_all_caps().newest_stage_only())));
    push(lesson(sentences(SentenceSpec::new(30).max_length(60).must_contain_newest())));

    // 52: review, one line of words and one starting with a capital
    push(
        lesson(words(WordSpec::new(1, 1).lengths(4, 4).plain().append()))
            .translated_lines(2)
            .then(words(
                WordSpec::new(1, 1)
                    .lengths(4, 4)
                    .no_all_caps()
                    .starting_with(LetterSet(vec![LetterSource::StageLetterUpper { stage: 5, position: 1 }]))
                    .append(),
            )),
    );

    // 53-55
    push(lesson(words(newest(3, 10).append())).new_stage().translated_lines(9));
    push(lesson(words(WordSpec::new(1, 15).no_all_caps().newest_stage_only().punctuation_probability(1.0))));
    push(lesson(sentences(SentenceSpec::new(30).max_length(60).must_contain_newest())));

    // 57-59: the last pair, before the spelling lesson
    push(
        lesson(words(WordSpec::new(3, 14).no_all_caps().newest_stage_only().append()))
            .reference(57)
            .new_stage()
            .translated_lines(7),
    );
    push(
        lesson(words(WordSpec::new(1, 14).no_all_caps().newest_stage_only().punctuation_probability(0.2)))
            .then(sentences(SentenceSpec::new(6).max_length(40).must_contain_newest().append())),
    );
    push(lesson(sentences(SentenceSpec::new(27).max_length(60).must_contain_newest())));

    // 56: spelling pitfalls
    push(lesson(Content::Copy).reference(56));
    // 60-78: digits, special characters, typography, test texts, shell
    push(lesson(Content::Copy).reference(60));
    for _ in 61..=78 {
        push(lesson(Content::Copy));
    }

    plan
}
