use crate::index::build_word_index;
use crate::phrase::construct_phrase;
use crate::srt::Subtitle;

use anyhow::{anyhow, Context, Result};
use tracing::info;

pub struct ProcessOpts {
    /// Phrase to reconstruct. Without one, every subtitle is selected.
    pub phrase: Option<String>,
}

/// Picks the subtitles to output for the given options.
pub fn process<'a>(subs: &'a [Subtitle], opts: &ProcessOpts) -> Result<Vec<&'a Subtitle>> {
    let phrase = match &opts.phrase {
        Some(phrase) => phrase,
        None => return Ok(subs.iter().collect()),
    };
    if phrase.trim().is_empty() {
        return Err(anyhow!("You appear to have supplied an empty phrase."));
    }

    let index = build_word_index(subs);
    let selected = construct_phrase(phrase, &index)
        .with_context(|| format!("Failed to construct phrase: '{}'", phrase))?;
    if selected.is_empty() {
        return Err(anyhow!("The phrase '{}' contains no words.", phrase));
    }
    info!(words = selected.len(), "constructed phrase");
    Ok(selected)
}
