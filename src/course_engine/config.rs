//! Run configuration.
//!
//! The defaults are the layout this tool was written for; a TOML file may
//! override any subset of them:
//!
//! ```toml
//! seed = 42
//!
//! [layout]
//! keys = "fj dk aö sl ei ru gh tz vm bn , . wo cx yä qp üß"
//!
//! [course]
//! title = "Deutsch QWERTZ"
//! keyboard_layout = "de(qwertz)"
//! ```
//!
//! Layout strings pair characters by position: the n-th character of `keys`
//! sits where the n-th character of `reference_keys` sits on the reference
//! layout, and the n-th character of `hands` names the hand that types it.
//! Pairs follow the reference course's order of introduction: index fingers,
//! middle fingers, pinkies, ring fingers, then the upper, lower and outer
//! keys. Comma and period stay in place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::course_engine::{
    corpus,
    error::{CourseError, Result},
    layout::Layout,
    models::CourseInfo,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub keys: String,
    /// Do not change unless the reference course changes.
    pub reference_keys: String,
    pub hands: String,
    /// Characters that get no uppercase translation pair.
    pub case_exclusions: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            keys: "en it ch rs ud ab om qw äf öp , . lg xü vk jy zß".to_string(),
            reference_keys: "en ar ud it lg ch os wk pm zb , . vf äö üj yß xq".to_string(),
            hands: "lr lr lr lr lr lr lr lr lr lr r r lr ll lr lr rr".to_string(),
            case_exclusions: ",.ß".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub directory: PathBuf,
    pub datasets: Vec<String>,
    /// Words seen fewer times are ignored.
    pub min_word_count: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            directory: PathBuf::from("corpus"),
            datasets: vec!["deu_wikipedia_2021_100K".to_string()],
            min_word_count: 10,
        }
    }
}

impl Default for CourseInfo {
    fn default() -> Self {
        CourseInfo {
            title: "Deutsches Mine".to_string(),
            description: "Adaptiert vom Kurs \"Deutsches Neo 2\" mit einem Script von Joerg H. Mueller,\n\
                          Original von Carsten MISCHKE <Carsten,Mischke@gmail.com>, Hanno Behrens und Hans Meine.\n\
                          Homepage: http://neo-layout.org"
                .to_string(),
            keyboard_layout: "de(mine)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub layout: LayoutConfig,
    pub course: CourseInfo,
    pub corpus: CorpusConfig,
    pub reference_course: PathBuf,
    pub output_directory: PathBuf,
    /// Fixed RNG seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        CourseConfig {
            layout: LayoutConfig::default(),
            course: CourseInfo::default(),
            corpus: CorpusConfig::default(),
            reference_course: PathBuf::from("courses/de.neo2.xml"),
            output_directory: PathBuf::from("courses"),
            seed: None,
        }
    }
}

impl CourseConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| CourseError::io(path, e))?;
        Self::from_toml_str(&raw)
    }

    pub fn layout(&self) -> Result<Layout> {
        Layout::new(
            &self.layout.keys,
            &self.layout.reference_keys,
            &self.layout.hands,
            &self.layout.case_exclusions,
        )
    }

    /// Word and sentence list files of the configured datasets.
    pub fn corpus_files(&self) -> (Vec<PathBuf>, Vec<PathBuf>) {
        corpus::dataset_paths(&self.corpus.directory, &self.corpus.datasets)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_directory
            .join(crate::course_engine::course_file::output_file_name(&self.course.keyboard_layout))
    }
}
