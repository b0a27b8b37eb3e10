use crate::error::PhraseError;
use crate::index::{split_words, WordIndex};
use crate::srt::Subtitle;

use tracing::trace;

/// Resolves every word of `phrase` to the earliest subtitle containing it.
///
/// The result follows the word order of the phrase, so a subtitle shows up
/// once for each phrase word it satisfies. If any word is missing from the
/// index nothing is returned.
pub fn construct_phrase<'a>(
    phrase: &str,
    index: &WordIndex<'a>,
) -> Result<Vec<&'a Subtitle>, PhraseError> {
    split_words(phrase)
        .into_iter()
        .map(|word| match index.get(&word).and_then(|subs| subs.first()) {
            Some(&sub) => {
                trace!(word = %word, index = sub.index, "resolved word");
                Ok(sub)
            }
            None => Err(PhraseError::Unsatisfiable { word }),
        })
        .collect()
}
