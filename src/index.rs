use crate::srt::Subtitle;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,.?!:;]").expect("punctuation pattern is valid"));

/// Splits text into words: the characters `, . ? ! : ;` are deleted, then the
/// rest is split on whitespace. Case is kept as is.
pub fn split_words(text: &str) -> Vec<String> {
    PUNCTUATION
        .replace_all(text, "")
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Maps each word to every subtitle containing it, in file order.
///
/// A subtitle is listed once per occurrence, so a word repeated within one
/// text lists that subtitle repeatedly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex<'a> {
    words: HashMap<String, Vec<&'a Subtitle>>,
}

impl<'a> WordIndex<'a> {
    pub fn get(&self, word: &str) -> Option<&[&'a Subtitle]> {
        self.words.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}

pub fn build_word_index(subs: &[Subtitle]) -> WordIndex<'_> {
    let mut words: HashMap<String, Vec<&Subtitle>> = HashMap::new();
    for sub in subs {
        for word in split_words(&sub.text) {
            words.entry(word).or_default().push(sub);
        }
    }
    debug!(
        subtitles = subs.len(),
        words = words.len(),
        "built word index"
    );
    WordIndex { words }
}
