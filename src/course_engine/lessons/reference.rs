//! Lessons derived directly from the reference course.
//!
//! - **Letter translation**: the reference text with every reference-layout
//!   character replaced by the target-layout character at the same position.
//! - **Copy**: layout-independent lessons (digits, special characters, test
//!   texts) keep the reference text and new characters as they are.
//! - **Title edits**: single-letter key callouts in titles are translated,
//!   spelled-out words are not.

use crate::course_engine::{
    lessons::LessonContext,
    models::Lesson,
};

pub fn letter_translate(ctx: &LessonContext, lesson: &mut Lesson) {
    lesson.text = ctx.layout.translation.translate(&lesson.text);
}

/// Keep the first `lines` lines of the reference text and translate them.
pub fn limit_and_translate(ctx: &LessonContext, lesson: &mut Lesson, lines: usize) {
    let kept = lesson.text.split('\n').take(lines).collect::<Vec<_>>().join("\n");
    lesson.text = ctx.layout.translation.translate(&kept);
}

pub fn copy(ctx: &LessonContext, lesson: &mut Lesson) {
    lesson.new_characters = ctx.reference.new_characters.clone();
}

pub fn translate_title(ctx: &LessonContext, lesson: &mut Lesson, word_length: usize) {
    lesson.title = ctx.layout.translation.translate_title(&lesson.title, word_length);
}

pub fn replace_title(lesson: &mut Lesson, from: &str, to: &str) {
    lesson.title = lesson.title.replace(from, to);
}
