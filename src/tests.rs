//! Crate-level tests for `typing_course_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Stage annotation | Words are reachable from the first stage covering all their letters |
//! | Built-in plan | All 79 lessons run on a synthetic corpus; titles, new characters, copies |
//! | Sentence lessons | Sampled lines respect length, alphabet and required letters |
//! | Determinism | Same seed gives the same course; different seeds differ |
//! | File pipeline | Corpus and reference files on disk in, course file out, read back |
//! | Summary | JSON summary lists every lesson |

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::course_engine::{
    build_course, course_file,
    corpus::{build_table, CorpusTables},
    generate_course,
    layout::upper_char,
    lessons::{words, LessonContext, Progress},
    plan::WordSpec,
    reference_course_plan, Course, CourseConfig, CourseInfo, Layout, Lesson, ReferenceLesson,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn default_layout() -> Layout {
    CourseConfig::default().layout().unwrap()
}

fn alphabetic(chars: &[char]) -> Vec<char> {
    chars.iter().copied().filter(|c| c.is_alphabetic()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(upper_char(first)).chain(chars).collect(),
        None => String::new(),
    }
}

/// Words that become typable exactly at `stage`: a letter of the stage
/// followed by two alternating introduced letters, lengths 3 to 7, each in
/// lowercase and capitalized form.
fn stage_words(layout: &Layout, stage: usize) -> Vec<String> {
    let pool = alphabetic(&layout.stages.introduced(Some(stage)));
    let mut out = Vec::new();
    for &first in &alphabetic(layout.stages.stage(stage)) {
        for &a in &pool {
            for &b in pool.iter().take(6) {
                for len in 3..=7 {
                    let word: String = std::iter::once(first).chain([a, b].into_iter().cycle().take(len - 1)).collect();
                    out.push(capitalize(&word));
                    out.push(word);
                }
            }
        }
    }
    out
}

/// Sixty two-word sentences per stage, each starting with a capitalized
/// letter of that stage.
fn stage_sentences(layout: &Layout, stage: usize) -> Vec<String> {
    let short: Vec<String> = stage_words(layout, stage)
        .into_iter()
        .filter(|w| w.chars().count() == 3 && w.chars().all(char::is_lowercase))
        .collect();
    if short.is_empty() {
        return Vec::new();
    }
    (0..60)
        .map(|i| format!("{} {}", capitalize(&short[i % short.len()]), short[(i * 7 + 3) % short.len()]))
        .collect()
}

fn synthetic_words(layout: &Layout) -> Vec<String> {
    (0..layout.stages.len()).flat_map(|s| stage_words(layout, s)).collect()
}

fn synthetic_sentences(layout: &Layout) -> Vec<String> {
    (0..layout.stages.len()).flat_map(|s| stage_sentences(layout, s)).collect()
}

fn synthetic_corpus(layout: &Layout) -> CorpusTables {
    let words = synthetic_words(layout);
    let total = words.len() as u64;
    let rows = words.into_iter().enumerate().map(|(i, w)| (w, Some(total - i as u64))).collect();
    let sentences = synthetic_sentences(layout).into_iter().map(|s| (s, None)).collect();
    CorpusTables::from_tables(
        build_table(rows, &layout.stages, 0),
        build_table(sentences, &layout.stages, 0),
        &layout.stages,
    )
}

fn reference_course() -> Vec<ReferenceLesson> {
    (0..79)
        .map(|i| ReferenceLesson {
            title: format!("Lektion {i}: a und r"),
            new_characters: format!("#{i}"),
            text: (0..20).map(|n| format!("arar uiui {n}")).collect::<Vec<_>>().join("\n"),
        })
        .collect()
}

fn run_plan(corpus: &CorpusTables, layout: &Layout, reference: &[ReferenceLesson], seed: u64) -> Course {
    build_course(
        corpus,
        layout,
        reference,
        CourseInfo::default(),
        &reference_course_plan(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

// ── stage annotation ─────────────────────────────────────────────────────────

#[test]
fn newest_stage_words_follow_their_first_covering_stage() {
    let layout = Layout::new("a b", "a b", "l r", ",.ß").unwrap();
    let rows = vec![("aa".to_string(), Some(100)), ("bb".to_string(), Some(50))];
    let corpus = CorpusTables { words: build_table(rows, &layout.stages, 0), ..Default::default() };
    assert_eq!(corpus.words[0].group, Some(0));
    assert_eq!(corpus.words[1].group, Some(1));

    let reference = ReferenceLesson::default();
    let ctx = |stage| LessonContext {
        corpus: &corpus,
        layout: &layout,
        reference: &reference,
        progress: Progress { stage: Some(stage), uppercase_learned: false },
    };
    let newest = WordSpec::new(1, 1).newest_stage_only();
    assert_eq!(words::select(&ctx(0), &newest), ["aa"]);
    assert_eq!(words::select(&ctx(1), &newest), ["bb"]);
    assert_eq!(words::select(&ctx(1), &WordSpec::new(1, 1)), ["aa", "bb"]);
}

// ── built-in plan ────────────────────────────────────────────────────────────

#[test]
fn built_in_plan_produces_every_lesson() {
    let layout = default_layout();
    let corpus = synthetic_corpus(&layout);
    let reference = reference_course();
    let course = run_plan(&corpus, &layout, &reference, 42);
    let lessons = &course.lessons;

    assert_eq!(lessons.len(), 79);
    assert!(lessons.iter().all(|l| !l.text.is_empty()), "every lesson has text");

    assert_eq!(lessons[0].new_characters, "en");
    assert_eq!(lessons[0].title, "Lektion 0: i und t");
    assert_eq!(lessons[0].text.lines().next(), Some("itit crcr 0"));
    assert_eq!(lessons[9].title, "Sicherheitstest der Grundstellung");
    assert_eq!(lessons[36].new_characters, "NTHSDBMWFP");
    assert_eq!(lessons[43].new_characters, "lgLG");
    assert_eq!(lessons[56].new_characters, "zßZ");

    let copied: Vec<&str> = lessons[59..].iter().map(|l| l.new_characters.as_str()).collect();
    let expected: Vec<String> = std::iter::once(56).chain(60..79).map(|i| format!("#{i}")).collect();
    assert_eq!(copied, expected);
}

#[test]
fn limited_translation_keeps_the_first_lines() {
    let layout = default_layout();
    let corpus = synthetic_corpus(&layout);
    let course = run_plan(&corpus, &layout, &reference_course(), 3);
    let lesson: &Lesson = &course.lessons[13];

    let lines: Vec<&str> = lesson.text.lines().collect();
    assert_eq!(lines.len(), 10 + 6);
    assert_eq!(lines[9], "itit crcr 9");
    assert!(lines[10..].iter().all(|l| l.chars().count() <= 60));
}

#[test]
fn sentence_lessons_respect_their_filters() {
    let layout = default_layout();
    let corpus = synthetic_corpus(&layout);
    let course = run_plan(&corpus, &layout, &reference_course(), 5);

    // left-hand capitals after the right shift key
    let lines: Vec<&str> = course.lessons[41].text.lines().collect();
    assert_eq!(lines.len(), 47);
    let left_upper = layout.letters_for_hand(Some(11), crate::course_engine::Hand::Left, true);
    for line in &lines {
        assert!(line.chars().count() <= 40);
        assert!(line.chars().any(|c| left_upper.contains(c)), "{line}");
    }

    // newest-stage sentences appended after the word drill
    let text = &course.lessons[45].text;
    let sentences: Vec<&str> = text.lines().rev().take(21).collect();
    for s in sentences {
        assert!(s.chars().any(|c| "lgLG".contains(c)), "{s}");
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_same_course() {
    let layout = default_layout();
    let corpus = synthetic_corpus(&layout);
    let reference = reference_course();
    let a = run_plan(&corpus, &layout, &reference, 99);
    let b = run_plan(&corpus, &layout, &reference, 99);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_vary_the_random_lessons() {
    let layout = default_layout();
    let corpus = synthetic_corpus(&layout);
    let reference = reference_course();
    let a = run_plan(&corpus, &layout, &reference, 1);
    let b = run_plan(&corpus, &layout, &reference, 2);
    assert_ne!(a, b);
    // translated lessons do not depend on the RNG
    assert_eq!(a.lessons[0], b.lessons[0]);
}

// ── file pipeline ────────────────────────────────────────────────────────────

fn write_dataset(dir: &Path, name: &str, layout: &Layout) {
    let dataset = dir.join(name);
    fs::create_dir_all(&dataset).unwrap();

    let words = synthetic_words(layout);
    let total = words.len();
    let word_lines: Vec<String> =
        words.iter().enumerate().map(|(i, w)| format!("{}\t{w}\t{}", i + 1, total - i)).collect();
    fs::write(dataset.join(format!("{name}-words.txt")), word_lines.join("\n")).unwrap();

    let sentence_lines: Vec<String> = synthetic_sentences(layout)
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}\t{s}", i + 1))
        .collect();
    fs::write(dataset.join(format!("{name}-sentences.txt")), sentence_lines.join("\n")).unwrap();
}

fn write_reference(path: &Path) {
    let course = Course {
        info: CourseInfo {
            title: "Deutsches Neo 2".into(),
            description: "Referenz".into(),
            keyboard_layout: "de(neo)".into(),
        },
        lessons: reference_course()
            .into_iter()
            .map(|r| Lesson { title: r.title, new_characters: r.new_characters, text: r.text })
            .collect(),
    };
    course_file::write_course(path, &course).unwrap();
}

#[test]
fn course_files_are_generated_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = CourseConfig {
        reference_course: dir.path().join("courses").join("de.neo2.xml"),
        output_directory: dir.path().join("out"),
        seed: Some(7),
        corpus: crate::course_engine::config::CorpusConfig {
            directory: dir.path().join("corpus"),
            datasets: vec!["tiny".to_string()],
            min_word_count: 1,
        },
        ..CourseConfig::default()
    };
    let layout = config.layout().unwrap();
    write_dataset(&config.corpus.directory, "tiny", &layout);
    write_reference(&config.reference_course);

    let course = generate_course(&config).unwrap();
    let path = config.output_path();
    assert!(path.ends_with("out/de.mine.xml"));
    course_file::write_course(&path, &course).unwrap();

    let back = course_file::read_reference_course(&path).unwrap();
    assert_eq!(back.len(), 79);
    assert_eq!(back[9].title, "Sicherheitstest der Grundstellung");
    assert_eq!(back[60].new_characters, "#60");
    assert_eq!(back[20].text, course.lessons[20].text);
}

#[test]
fn missing_corpus_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CourseConfig::default();
    config.corpus.directory = dir.path().join("nowhere");
    let err = generate_course(&config).unwrap_err();
    assert!(matches!(err, crate::course_engine::CourseError::Io { .. }));
}

// ── summary ──────────────────────────────────────────────────────────────────

#[test]
fn summary_lists_every_lesson() {
    let layout = default_layout();
    let corpus = synthetic_corpus(&layout);
    let course = run_plan(&corpus, &layout, &reference_course(), 11);

    let summary = course.summary();
    assert_eq!(summary.lessons.len(), 79);
    assert_eq!(summary.keyboard_layout, "de(mine)");
    assert_eq!(summary.lessons[13].lines, 16);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["lessons"][0]["new_characters"], "en");
}
