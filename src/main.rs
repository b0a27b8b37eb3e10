use saywhat::parser::parse_subtitles;
use saywhat::processor::{self, ProcessOpts};
use saywhat::serialiser;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            process::exit(1);
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One line per subtitle with its original index.
    List,
    /// A renumbered SRT file.
    Srt,
}

#[derive(ClapParser)]
#[command(about = "Say a phrase using lines from an SRT subtitle file")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to read from. If not supplied, the subtitles will be read from standard input.",
        default_value = "-"
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. If not supplied, the result will be written to standard output.",
        default_value = "-"
    )]
    output: String,
    #[arg(
        short,
        long,
        value_enum,
        help = "How to write the selected subtitles.",
        default_value = "list"
    )]
    format: Format,
    #[arg(long, help = "Enable debug and trace logs.")]
    debug: bool,
    #[arg(
        value_name = "PHRASE",
        help = "The phrase to reconstruct. If not supplied, every subtitle is written."
    )]
    phrase: Vec<String>,
}

fn init_logging(debug: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if debug => EnvFilter::try_new("saywhat=trace,info")?,
        Err(_) => EnvFilter::try_new("saywhat=info,warn")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let parsed = if cli.input == "-" {
        parse_subtitles(io::stdin().lock())
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("Failed to open input file: '{}'", cli.input))?;
        parse_subtitles(BufReader::new(file))
    };
    let subs = parsed.with_context(|| format!("Failed to parse SRT file: '{}'", cli.input))?;
    if subs.is_empty() {
        return Err(anyhow!("You appear to have supplied an empty file."));
    }
    info!(count = subs.len(), input = %cli.input, "loaded subtitles");

    let opts = ProcessOpts {
        phrase: if cli.phrase.is_empty() {
            None
        } else {
            Some(cli.phrase.join(" "))
        },
    };
    let selected = processor::process(&subs, &opts)?;

    let dst: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("Failed to create output file: '{}'", cli.output))?;
        Box::new(file)
    };
    match cli.format {
        Format::List => serialiser::list(&selected, dst)?,
        Format::Srt => serialiser::serialise(&selected, dst)?,
    }

    Ok(())
}
