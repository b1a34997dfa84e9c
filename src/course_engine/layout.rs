//! Keyboard layout description: stage progression, character remapping and
//! handedness.
//!
//! All three are built from space-separated key strings such as
//! `"en it ch rs"`, where every word is one stage (usually a key pair, one key
//! per hand) and the position of a character pairs it with the character at
//! the same position in the other layout.

use std::collections::{BTreeSet, HashMap};

use crate::course_engine::{
    error::{CourseError, Result},
    models::Hand,
};

/// Uppercase form of a single character.
///
/// `ß` maps to the capital sharp s; characters whose uppercase form is not a
/// single char are returned unchanged.
pub fn upper_char(c: char) -> char {
    if c == 'ß' {
        return 'ẞ';
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Does `c` have a distinct uppercase form?
pub fn has_case(c: char) -> bool {
    upper_char(c) != c
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Ordered partition of the layout's characters into stages.
#[derive(Debug, Clone)]
pub struct Stages {
    stages: Vec<Vec<char>>,
    cumulative: Vec<BTreeSet<char>>,
}

impl Stages {
    pub fn parse(keys: &str) -> Self {
        Self::from_stages(keys.split_whitespace().map(|s| s.chars().collect()).collect())
    }

    pub fn from_stages(stages: Vec<Vec<char>>) -> Self {
        let mut cumulative = Vec::with_capacity(stages.len());
        let mut acc = BTreeSet::new();
        for stage in &stages {
            acc.extend(stage.iter().copied());
            cumulative.push(acc.clone());
        }
        Stages { stages, cumulative }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Characters first introduced by `stage`.
    pub fn stage(&self, stage: usize) -> &[char] {
        self.stages.get(stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All characters introduced up to and including `stage`, in the order
    /// they were introduced.
    pub fn introduced(&self, stage: Option<usize>) -> Vec<char> {
        match stage {
            Some(s) => self.stages.iter().take(s + 1).flatten().copied().collect(),
            None => Vec::new(),
        }
    }

    /// Smallest stage whose cumulative character set covers `characters`.
    pub fn group_of(&self, characters: &BTreeSet<char>) -> Option<usize> {
        self.cumulative.iter().position(|set| characters.is_subset(set))
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Character substitution from the reference layout to the target layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    map: HashMap<char, char>,
}

impl TranslationTable {
    /// Pair `reference` and `target` position by position.
    ///
    /// Uppercase pairs are added for every pair where neither side is in
    /// `case_exclusions`.
    pub fn build(reference: &str, target: &str, case_exclusions: &str) -> Result<Self> {
        let reference: Vec<char> = reference.chars().collect();
        let target: Vec<char> = target.chars().collect();
        if reference.len() != target.len() {
            return Err(CourseError::LayoutMismatch(format!(
                "reference keys have {} characters, target keys have {}",
                reference.len(),
                target.len()
            )));
        }

        let mut map = HashMap::new();
        for (&from, &to) in reference.iter().zip(&target) {
            map.insert(from, to);
        }
        for (&from, &to) in reference.iter().zip(&target) {
            if case_exclusions.contains(from) || case_exclusions.contains(to) {
                continue;
            }
            map.insert(upper_char(from), upper_char(to));
        }
        Ok(TranslationTable { map })
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        TranslationTable { map: pairs.into_iter().collect() }
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn inverse(&self) -> Self {
        TranslationTable { map: self.map.iter().map(|(&k, &v)| (v, k)).collect() }
    }

    /// One pass over `text`; unmapped characters pass through.
    pub fn translate(&self, text: &str) -> String {
        text.chars().map(|c| self.map.get(&c).copied().unwrap_or(c)).collect()
    }

    /// Translate only the space-separated words that are exactly
    /// `word_length` chars long.
    pub fn translate_title(&self, title: &str, word_length: usize) -> String {
        title
            .split(' ')
            .map(|word| {
                if word.chars().count() == word_length {
                    self.translate(word)
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ---------------------------------------------------------------------------
// Handedness
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct HandTable {
    hands: HashMap<char, Hand>,
}

impl HandTable {
    /// Pair every key with the hand letter at the same position.
    pub fn build(keys: &str, hands: &str) -> Result<Self> {
        let keys: Vec<char> = keys.chars().collect();
        let hand_chars: Vec<char> = hands.chars().collect();
        if keys.len() != hand_chars.len() {
            return Err(CourseError::LayoutMismatch(format!(
                "{} keys but {} hand assignments",
                keys.len(),
                hand_chars.len()
            )));
        }

        let mut table = HashMap::new();
        for (&key, &h) in keys.iter().zip(&hand_chars) {
            if key.is_whitespace() {
                continue;
            }
            let hand = Hand::from_char(h).ok_or_else(|| {
                CourseError::LayoutMismatch(format!("key '{key}' has no hand (found '{h}')"))
            })?;
            table.insert(key, hand);
        }
        Ok(HandTable { hands: table })
    }

    pub fn hand_of(&self, c: char) -> Option<Hand> {
        self.hands.get(&c).copied()
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Everything derived from the layout configuration.
#[derive(Debug, Clone)]
pub struct Layout {
    pub stages: Stages,
    pub translation: TranslationTable,
    pub hands: HandTable,
}

impl Layout {
    pub fn new(keys: &str, reference_keys: &str, hands: &str, case_exclusions: &str) -> Result<Self> {
        Ok(Layout {
            stages: Stages::parse(keys),
            translation: TranslationTable::build(reference_keys, keys, case_exclusions)?,
            hands: HandTable::build(keys, hands)?,
        })
    }

    /// Introduced letters typed by `hand` that have an uppercase form.
    pub fn letters_for_hand(&self, stage: Option<usize>, hand: Hand, upper: bool) -> String {
        self.stages
            .introduced(stage)
            .into_iter()
            .filter(|&c| has_case(c) && self.hands.hand_of(c) == Some(hand))
            .map(|c| if upper { upper_char(c) } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_of_picks_smallest_covering_stage() {
        let stages = Stages::parse("a b");
        let aa: BTreeSet<char> = ['a'].into_iter().collect();
        let ab: BTreeSet<char> = ['a', 'b'].into_iter().collect();
        let az: BTreeSet<char> = ['a', 'z'].into_iter().collect();
        assert_eq!(stages.group_of(&aa), Some(0));
        assert_eq!(stages.group_of(&ab), Some(1));
        assert_eq!(stages.group_of(&az), None);
    }

    #[test]
    fn introduced_keeps_introduction_order() {
        let stages = Stages::parse("en it ch");
        assert_eq!(stages.introduced(Some(1)), vec!['e', 'n', 'i', 't']);
        assert!(stages.introduced(None).is_empty());
        assert_eq!(stages.stage(2), &['c', 'h']);
        assert!(stages.stage(9).is_empty());
    }

    #[test]
    fn uppercase_mapping_is_optional() {
        let with_case = TranslationTable::build("x", "y", "").unwrap();
        assert_eq!(with_case.translate("Xx.x"), "Yy.y");

        let lower_only = TranslationTable::from_pairs([('x', 'y')]);
        assert_eq!(lower_only.translate("Xx.x"), "Xy.y");
    }

    #[test]
    fn excluded_characters_get_no_uppercase_pair() {
        let table = TranslationTable::build("ß,a", "z,b", ",.ß").unwrap();
        assert_eq!(table.get('ß'), Some('z'));
        assert_eq!(table.get('ẞ'), None);
        assert_eq!(table.get('Z'), None);
        assert_eq!(table.get(','), Some(','));
        assert_eq!(table.get('A'), Some('B'));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(matches!(
            TranslationTable::build("ab", "a", ""),
            Err(CourseError::LayoutMismatch(_))
        ));
    }

    #[test]
    fn title_translation_only_touches_words_of_given_length() {
        let table = TranslationTable::build("x", "y", "").unwrap();
        assert_eq!(table.translate_title("X ab", 1), "Y ab");
        assert_eq!(table.translate_title("xx x", 2), "yy x");
    }

    #[test]
    fn round_trip_through_inverse_restores_text() {
        let table = TranslationTable::build("en ar ud", "en it ch", ",.ß").unwrap();
        let inverse = table.inverse();
        let text = "Rad und Ende, nur da.";
        let reference_only: String = text
            .chars()
            .filter(|c| "enarudENARUD ,.".contains(*c))
            .collect();
        assert_eq!(inverse.translate(&table.translate(&reference_only)), reference_only);
    }

    #[test]
    fn translating_twice_changes_nothing_when_key_sets_are_disjoint() {
        let table = TranslationTable::build("ab", "xy", "").unwrap();
        for text in ["Abba, baB!", "xyz ABC.", "", "ä b-A"] {
            let once = table.translate(text);
            assert_eq!(table.translate(&once), once, "{text}");
        }
        assert_eq!(table.translate("Abba, baB!"), "Xyyx, yxY!");
    }

    #[test]
    fn letters_for_hand_filters_by_hand_and_case() {
        let layout = Layout::new("en it , zß", "en ar , yß", "lr lr r rr", ",.ß").unwrap();
        assert_eq!(layout.letters_for_hand(Some(1), Hand::Left, true), "EI");
        assert_eq!(layout.letters_for_hand(Some(3), Hand::Right, true), "NTZẞ");
        assert_eq!(layout.letters_for_hand(Some(3), Hand::Right, false), "ntzß");
        assert_eq!(layout.letters_for_hand(None, Hand::Left, true), "");
    }

    #[test]
    fn hand_string_must_cover_every_key() {
        assert!(HandTable::build("en it", "lr").is_err());
        assert!(HandTable::build("en", "lx").is_err());
    }
}
