//! Parse SRT subtitles and rebuild arbitrary phrases out of them, one
//! subtitle per word.

pub mod error;
pub mod index;
pub mod parser;
pub mod phrase;
pub mod processor;
pub mod serialiser;
pub mod srt;
pub mod timecode;

pub use crate::error::{FormatError, ParseError, PhraseError, TimecodeError};
pub use crate::index::{build_word_index, split_words, WordIndex};
pub use crate::parser::{parse_entry, parse_lines, parse_subtitles, BlockState};
pub use crate::phrase::construct_phrase;
pub use crate::srt::Subtitle;
pub use crate::timecode::{format_timecode, parse_timecode};
