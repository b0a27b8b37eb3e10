use crate::error::{Endpoint, FormatError, ParseError};
use crate::srt::Subtitle;
use crate::timecode::parse_timecode;

use std::io::BufRead;
use std::mem;

use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::error::VerboseError;
use nom::sequence::pair;
use nom::IResult;
use tracing::{debug, trace};

const RANGE_SEPARATOR: &str = "-->";
const BOM: char = '\u{FEFF}';

/// Reads SRT blocks from a line source, preserving file order.
pub fn parse_subtitles<R: BufRead>(reader: R) -> Result<Vec<Subtitle>, ParseError> {
    segment(reader.lines().enumerate().map(|(number, line)| {
        line.map_err(|source| ParseError::Io {
            line: number + 1,
            source,
        })
    }))
}

/// Same as [`parse_subtitles`], over lines that are already in memory.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<Subtitle>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segment(lines.into_iter().map(Ok))
}

fn segment<I, S>(lines: I) -> Result<Vec<Subtitle>, ParseError>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    let mut subs = Vec::new();
    let mut state = BlockState::new();
    for (number, line) in lines.enumerate() {
        let line = line?;
        let mut line = line.as_ref();
        line = line.strip_suffix('\r').unwrap_or(line);
        if number == 0 {
            line = line.trim_start_matches(BOM);
        }
        let (next, emitted) = state.step(number + 1, line)?;
        state = next;
        subs.extend(emitted);
    }
    state.finish()?;
    debug!(count = subs.len(), "parsed subtitles");
    Ok(subs)
}

/// Accumulation state of the block segmenter.
///
/// The segmenter is a fold: each line moves the state forward and may emit a
/// finished subtitle. A blank line closes the pending block once it holds at
/// least an index and a time range; with fewer fields it is absorbed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockState {
    pending: Vec<String>,
    start_line: usize,
}

impl BlockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields collected for the block currently being read.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Feeds one line, without its terminator. `line_number` is 1-based and
    /// only used for error reporting.
    pub fn step(
        mut self,
        line_number: usize,
        line: &str,
    ) -> Result<(Self, Option<Subtitle>), ParseError> {
        if !line.is_empty() {
            if self.pending.is_empty() {
                self.start_line = line_number;
            }
            self.pending.push(line.to_string());
            return Ok((self, None));
        }

        if self.pending.len() < 2 {
            trace!(line = line_number, "absorbed blank line");
            return Ok((self, None));
        }

        let start_line = self.start_line;
        let mut fields = mem::take(&mut self.pending).into_iter();
        // At least two fields are pending at this point.
        let index = fields.next().unwrap_or_default();
        let time_range = fields.next().unwrap_or_default();
        let text = fields.collect::<Vec<_>>().join(" ");

        let sub = parse_entry(&index, &time_range, text).map_err(|source| ParseError::Format {
            line: start_line,
            source,
        })?;
        debug!(index = sub.index, line = start_line, "finished block");
        Ok((Self::new(), Some(sub)))
    }

    /// Checks that the input did not stop in the middle of a block.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(ParseError::Truncated {
                line: self.start_line,
            })
        }
    }
}

/// Turns the three raw fields of a block into a subtitle. The text is taken
/// verbatim.
pub fn parse_entry(index: &str, time_range: &str, text: String) -> Result<Subtitle, FormatError> {
    let index = seq_num(index)?;

    let times: Vec<&str> = time_range.split(RANGE_SEPARATOR).collect();
    if times.len() != 2 {
        return Err(FormatError::TimeRange {
            value: time_range.to_string(),
            found: times.len() - 1,
        });
    }

    let appear = parse_timecode(times[0].trim()).map_err(|source| FormatError::Timecode {
        endpoint: Endpoint::Appear,
        source,
    })?;
    let disappear = parse_timecode(times[1].trim()).map_err(|source| FormatError::Timecode {
        endpoint: Endpoint::Disappear,
        source,
    })?;

    Ok(Subtitle {
        index,
        appear,
        disappear,
        text,
    })
}

fn signed_digits(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    all_consuming(recognize(pair(opt(one_of("+-")), digit1)))(input)
}

fn seq_num(field: &str) -> Result<i64, FormatError> {
    let err = || FormatError::Index {
        value: field.to_string(),
    };
    let (_, digits) = signed_digits(field).map_err(|_| err())?;
    digits.parse().map_err(|_| err())
}
