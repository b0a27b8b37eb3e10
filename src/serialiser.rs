use crate::srt::Subtitle;
use crate::timecode::format_timecode;

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Writes subtitles as an SRT file, renumbered from 1 in the given order.
pub fn serialise<W: Write>(subs: &[&Subtitle], output: W) -> Result<()> {
    let mut writer = BufWriter::new(output);
    for (seqnum, sub) in subs.iter().enumerate() {
        write_sub(&mut writer, seqnum + 1, sub).context("Failed to write subtitle.")?;
    }
    writer.flush().context("Failed to write to output.")?;
    Ok(())
}

/// Writes one line per subtitle: the original index, the time range and the
/// text.
pub fn list<W: Write>(subs: &[&Subtitle], output: W) -> Result<()> {
    let mut writer = BufWriter::new(output);
    for sub in subs {
        writeln!(
            writer,
            "{}\t{} --> {}\t{}",
            sub.index,
            format_timecode(sub.appear),
            format_timecode(sub.disappear),
            sub.text
        )
        .context("Failed to write subtitle.")?;
    }
    writer.flush().context("Failed to write to output.")?;
    Ok(())
}

fn write_sub<W: Write>(buf: &mut W, seqnum: usize, sub: &Subtitle) -> Result<()> {
    writeln!(buf, "{}", seqnum)?;
    writeln!(
        buf,
        "{} --> {}",
        format_timecode(sub.appear),
        format_timecode(sub.disappear)
    )?;
    if !sub.text.is_empty() {
        writeln!(buf, "{}", sub.text)?;
    }
    writeln!(buf)?;
    Ok(())
}
