//! Reading the reference course and writing the generated one.
//!
//! Both use the course markup of the typing tutor:
//!
//! ```text
//! <course>
//!  <id>{…}</id>
//!  <title>…</title>
//!  <description>…</description>
//!  <keyboardLayout>…</keyboardLayout>
//!  <lessons>
//!   <lesson>
//!    <id>{…}</id>
//!    <title>…</title>
//!    <newCharacters>…</newCharacters>
//!    <text>…</text>
//!   </lesson>
//!  </lessons>
//! </course>
//! ```

use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::course_engine::{
    error::{CourseError, Result},
    models::{Course, ReferenceLesson},
};

#[derive(Serialize)]
#[serde(rename = "course")]
struct CourseOut<'a> {
    id: String,
    title: &'a str,
    description: &'a str,
    #[serde(rename = "keyboardLayout")]
    keyboard_layout: &'a str,
    lessons: LessonsOut<'a>,
}

#[derive(Serialize)]
struct LessonsOut<'a> {
    lesson: Vec<LessonOut<'a>>,
}

#[derive(Serialize)]
struct LessonOut<'a> {
    id: String,
    title: &'a str,
    #[serde(rename = "newCharacters")]
    new_characters: &'a str,
    text: &'a str,
}

/// Fresh identifier in the braced form the typing tutor uses.
pub fn new_id() -> String {
    format!("{{{}}}", Uuid::new_v4())
}

/// File name for a keyboard layout name: `de(mine)` becomes `de.mine.xml`.
pub fn output_file_name(keyboard_layout: &str) -> String {
    format!("{}.xml", keyboard_layout.replace('(', ".").replace(')', ""))
}

/// Field of a reference lesson a text node belongs to.
fn lesson_field<'l>(lesson: &'l mut ReferenceLesson, name: &[u8]) -> Option<&'l mut String> {
    match name {
        b"title" => Some(&mut lesson.title),
        b"newCharacters" => Some(&mut lesson.new_characters),
        b"text" => Some(&mut lesson.text),
        _ => None,
    }
}

/// Collect the `lessons/lesson` entries of a course document.
///
/// Text is kept exactly as written, including leading and trailing
/// whitespace; copied lessons depend on it.
pub fn parse_reference_course(xml: &str) -> Result<Vec<ReferenceLesson>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<ReferenceLesson> = None;
    let mut lessons = Vec::new();

    let in_lessons = |path: &[Vec<u8>]| path.last().map_or(false, |p| p.as_slice() == b"lessons");

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"lesson" && in_lessons(&path) {
                    current = Some(ReferenceLesson::default());
                }
                path.push(name);
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"lesson" && in_lessons(&path) {
                    lessons.push(ReferenceLesson::default());
                }
            }
            Event::End(_) => {
                let name = path.pop();
                if name.as_deref() == Some(b"lesson".as_slice()) && in_lessons(&path) {
                    lessons.extend(current.take());
                }
            }
            Event::Text(t) => {
                if let (Some(lesson), [.., parent, field]) = (current.as_mut(), path.as_slice()) {
                    if parent.as_slice() == b"lesson" {
                        if let Some(target) = lesson_field(lesson, field) {
                            target.push_str(&t.unescape()?);
                        }
                    }
                }
            }
            Event::CData(c) => {
                if let (Some(lesson), [.., parent, field]) = (current.as_mut(), path.as_slice()) {
                    if parent.as_slice() == b"lesson" {
                        if let Some(target) = lesson_field(lesson, field) {
                            target.push_str(&String::from_utf8_lossy(&c));
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lessons)
}

pub fn read_reference_course<P: AsRef<Path>>(path: P) -> Result<Vec<ReferenceLesson>> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|e| CourseError::io(path, e))?;
    let lessons = parse_reference_course(&xml)?;
    info!(path = %path.display(), lessons = lessons.len(), "reference course loaded");
    Ok(lessons)
}

/// Serialize a course, assigning new ids to the course and every lesson.
pub fn render_course(course: &Course) -> Result<String> {
    let doc = CourseOut {
        id: new_id(),
        title: &course.info.title,
        description: &course.info.description,
        keyboard_layout: &course.info.keyboard_layout,
        lessons: LessonsOut {
            lesson: course
                .lessons
                .iter()
                .map(|l| LessonOut {
                    id: new_id(),
                    title: &l.title,
                    new_characters: &l.new_characters,
                    text: &l.text,
                })
                .collect(),
        },
    };

    let mut body = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut body);
    ser.indent(' ', 1);
    doc.serialize(ser)?;

    Ok(format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n{body}\n"))
}

pub fn write_course<P: AsRef<Path>>(path: P, course: &Course) -> Result<()> {
    let path = path.as_ref();
    let xml = render_course(course)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CourseError::io(parent, e))?;
    }
    fs::write(path, xml).map_err(|e| CourseError::io(path, e))?;

    info!(path = %path.display(), lessons = course.lessons.len(), "course written");
    Ok(())
}
