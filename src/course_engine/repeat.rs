//! Line-wrapping repetition shared by the bigram and word lessons.
//!
//! Tokens are cycled in order, each one written `repeats` times in a row,
//! and packed into space-separated lines of at most `line_length` chars until
//! `line_count` lines exist. Optionally a punctuation mark is glued to a
//! token with a given probability, but only where it still fits the line.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    pub repeats: usize,
    pub line_length: usize,
    pub line_count: usize,
    /// Marks to choose from when punctuating.
    pub punctuation: String,
    /// Chance of appending a mark after a token; `0.0` disables it.
    pub punctuation_probability: f64,
}

impl Default for Repetition {
    fn default() -> Self {
        Repetition {
            repeats: 1,
            line_length: 60,
            line_count: 30,
            punctuation: ",.".to_string(),
            punctuation_probability: 0.0,
        }
    }
}

impl Repetition {
    pub fn new(repeats: usize, line_length: usize, line_count: usize) -> Self {
        Repetition { repeats, line_length, line_count, ..Default::default() }
    }
}

/// Produce the lesson text, exactly `line_count` lines.
///
/// Tokens longer than the line width are skipped since they could never be
/// placed. When that leaves nothing (or `tokens` is empty) the result is
/// `None` rather than `line_count` empty lines.
pub fn repeat_tokens<R: Rng, S: AsRef<str>>(rng: &mut R, tokens: &[S], rep: &Repetition) -> Option<String> {
    let tokens: Vec<(&str, usize)> = tokens
        .iter()
        .map(|t| (t.as_ref(), t.as_ref().chars().count()))
        .filter(|&(_, len)| len <= rep.line_length)
        .collect();
    if tokens.is_empty() {
        return None;
    }

    let marks: Vec<char> = rep.punctuation.chars().collect();
    let punctuate = rep.punctuation_probability > 0.0 && !marks.is_empty();
    let repeats = rep.repeats.max(1);

    let mut lines: Vec<String> = Vec::with_capacity(rep.line_count);
    let mut current = 0usize;
    let mut repeated = 0usize;

    while lines.len() < rep.line_count {
        let mut line: Vec<String> = Vec::new();
        // Length of the line including one trailing separator per token.
        let mut used = 0usize;

        loop {
            let (token, len) = tokens[current];
            if used + len > rep.line_length {
                break;
            }

            let room_for_mark = used + len < rep.line_length;
            let mark = if punctuate && room_for_mark && rng.gen::<f64>() <= rep.punctuation_probability {
                marks.choose(rng).copied()
            } else {
                None
            };

            match mark {
                Some(m) => {
                    line.push(format!("{token}{m}"));
                    used += len + 2;
                }
                None => {
                    line.push(token.to_string());
                    used += len + 1;
                }
            }

            repeated += 1;
            if repeated == repeats {
                current = (current + 1) % tokens.len();
                repeated = 0;
            }
        }

        lines.push(line.join(" "));
    }

    Some(lines.join("\n"))
}
