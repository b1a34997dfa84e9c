//! Core course engine: corpus tables, layout remapping, lesson generators
//! and the sequencer that strings them together.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: corpus records, lessons, course, hands |
//! | `error`       | `CourseError` and the crate `Result` alias |
//! | `config`      | Run configuration with built-in defaults and TOML overrides |
//! | `layout`      | Stages of key pairs, translation and hand tables |
//! | `corpus`      | Word and sentence list loading, stage annotation |
//! | `ngram`       | Character n-gram counting over the sentence table |
//! | `repeat`      | Token repetition wrapped into fixed-width lines |
//! | `plan`        | Lesson plans as data: steps, content, letter sets |
//! | `curriculum`  | The built-in plan derived from the reference course |
//! | `lessons`     | One generator per content kind, dispatched by `apply` |
//! | `sequencer`   | Runs a plan and carries the progress context |
//! | `course_file` | Reference course reader and course writer (XML) |
//! | `generator`   | Entry points `generate_course()` and `build_course()` |

pub mod config;
pub mod corpus;
pub mod course_file;
pub mod curriculum;
pub mod error;
pub mod generator;
pub mod layout;
pub mod lessons;
pub mod models;
pub mod ngram;
pub mod plan;
pub mod repeat;
pub mod sequencer;

pub use config::CourseConfig;
pub use corpus::CorpusTables;
pub use course_file::{read_reference_course, write_course};
pub use curriculum::reference_course_plan;
pub use error::{CourseError, Result};
pub use generator::{build_course, generate_course, make_rng};
pub use layout::Layout;
pub use models::{Course, CourseInfo, CourseSummary, Hand, Lesson, ReferenceLesson};
pub use plan::{Content, LessonPlan, LetterSet, LetterSource, Step};
pub use sequencer::{generate_lessons, Sequencer};
