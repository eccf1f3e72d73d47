use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use log::debug;
use srtmerge::{merge_files, parse_offset, LineEnding, Renumbering, SrtConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "srtmerge")]
#[command(version)]
#[command(about = "Merge SubRip (SRT) subtitle files into one continuous track")]
#[command(long_about = "Merges SRT files in the order given. The first file is kept as is; every \
following file is renumbered after the previous ones and shifted by its offset.

Example:
  srtmerge part1.srt part2.srt -t 00:45:10,500 -o movie.srt")]
struct Args {
    /// Subtitle files to merge, in timeline order
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Time offset for each input after the first (repeat once per file)
    #[arg(short = 't', long = "offset", value_name = "HH:MM:SS,mmm", value_parser = check_offset)]
    offsets: Vec<String>,

    /// Line ending used in the output
    #[arg(long, value_enum, default_value_t = LineEndingArg::Native)]
    line_ending: LineEndingArg,

    /// Number every file after the first from the first file's count only
    #[arg(long)]
    legacy_numbering: bool,

    /// Enable debug logging (traces every parsed cue)
    #[arg(short, long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum LineEndingArg {
    Lf,
    Crlf,
    Native,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
            LineEndingArg::Native => LineEnding::native(),
        }
    }
}

fn check_offset(value: &str) -> Result<String, String> {
    parse_offset(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    if args.offsets.len() + 1 != args.inputs.len() {
        Args::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "{} input files need {} --offset values, got {}",
                    args.inputs.len(),
                    args.inputs.len() - 1,
                    args.offsets.len()
                ),
            )
            .exit();
    }

    let renumbering = if args.legacy_numbering {
        Renumbering::FirstTrack
    } else {
        Renumbering::Cumulative
    };
    let config = SrtConfig::new(args.line_ending.into(), renumbering);
    debug!("Running with {:?}", config);

    let written = merge_files(&args.inputs, &args.offsets, &args.output, &config)
        .with_context(|| format!("Failed to merge into {}", args.output.display()))?;

    println!(
        "✅ Wrote {} cues from {} files to {}",
        written,
        args.inputs.len(),
        args.output.display()
    );
    Ok(())
}
