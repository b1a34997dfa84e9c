use std::collections::{BTreeSet, HashMap};

use crate::course_engine::{layout::Stages, models::CorpusRecord};

/// Counts every contiguous run of `n` characters in a set of texts.
///
/// Counts keep the order in which each n-gram was first seen, so that sorting
/// by frequency is reproducible for equal counts.
///
/// # Invariants
/// - `n` is always >= 1
/// - Every stored count is >= 1
#[derive(Debug, Clone)]
pub struct NGramCounter {
    n: usize,
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl NGramCounter {
    pub fn new(n: usize) -> Self {
        Self { n: n.max(1), index: HashMap::new(), counts: Vec::new() }
    }

    /// Adds every n-gram of `text`. Texts shorter than `n` add nothing.
    pub fn add_text(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < self.n {
            return;
        }

        for window in chars.windows(self.n) {
            let gram: String = window.iter().collect();
            match self.index.get(&gram) {
                Some(&i) => self.counts[i].1 += 1,
                None => {
                    self.index.insert(gram.clone(), self.counts.len());
                    self.counts.push((gram, 1));
                }
            }
        }
    }

    pub fn count(&self, gram: &str) -> u64 {
        self.index.get(gram).map_or(0, |&i| self.counts[i].1)
    }

    pub fn into_counts(self) -> Vec<(String, u64)> {
        self.counts
    }
}

/// Build the n-gram table from the sentence table.
///
/// N-grams containing whitespace are dropped; the rest is sorted by
/// descending count. The stage is computed from the n-gram's characters as
/// they appear (no lowercasing), so n-grams with capitals stay unreachable.
pub fn build_ngram_table(sentences: &[CorpusRecord], stages: &Stages, n: usize) -> Vec<CorpusRecord> {
    let mut counter = NGramCounter::new(n);
    for sentence in sentences {
        counter.add_text(&sentence.text);
    }

    let mut table: Vec<CorpusRecord> = counter
        .into_counts()
        .into_iter()
        .filter(|(gram, _)| !gram.chars().any(char::is_whitespace))
        .map(|(gram, count)| {
            let characters: BTreeSet<char> = gram.chars().collect();
            CorpusRecord {
                length: gram.chars().count(),
                group: stages.group_of(&characters),
                text: gram,
                count: Some(count),
                characters,
            }
        })
        .collect();

    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}
