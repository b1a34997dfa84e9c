use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::course_engine::{
    config::CourseConfig,
    corpus::CorpusTables,
    course_file,
    curriculum,
    error::Result,
    layout::Layout,
    models::{Course, CourseInfo, ReferenceLesson},
    plan::Step,
    sequencer,
};

/// Seeded generator when a seed is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Run a plan against already loaded inputs.
pub fn build_course<R: Rng>(
    corpus: &CorpusTables,
    layout: &Layout,
    reference: &[ReferenceLesson],
    info: CourseInfo,
    steps: &[Step],
    rng: R,
) -> Result<Course> {
    let lessons = sequencer::generate_lessons(corpus, layout, reference, steps, rng)?;
    Ok(Course { info, lessons })
}

/// Load everything the configuration points at and run the built-in plan.
///
/// Nothing is written; see [`course_file::write_course`].
pub fn generate_course(config: &CourseConfig) -> Result<Course> {
    let layout = config.layout()?;
    info!(stages = layout.stages.len(), layout = %config.course.keyboard_layout, "layout ready");

    let (word_files, sentence_files) = config.corpus_files();
    let corpus = CorpusTables::load(&word_files, &sentence_files, &layout.stages, config.corpus.min_word_count)?;
    let reference = course_file::read_reference_course(&config.reference_course)?;

    build_course(
        &corpus,
        &layout,
        &reference,
        config.course.clone(),
        &curriculum::reference_course_plan(),
        make_rng(config.seed),
    )
}
