use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use fmt::{PerLine, StrSep};
use seq::SplitSep;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Splits each line of stdin at a separator character.
#[derive(Debug, Parser)]
#[command(name = "seqsplit")]
struct Args {
    /// Separator character
    #[arg(short, long, default_value_t = '-')]
    sep: char,

    /// Written between the pieces of a line
    #[arg(short, long, default_value = "\t")]
    delim: String,

    /// Print each piece on its own line
    #[arg(long, conflicts_with = "count")]
    per_line: bool,

    /// Print only the number of pieces of each line
    #[arg(short, long)]
    count: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0:?} ends lines and cannot separate pieces within one")]
    LineBreakSeparator(char),
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

#[derive(Debug, Default, PartialEq)]
struct Stats {
    lines: usize,
    pieces: usize,
}

fn run(
    args: &Args,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<Stats, CliError> {
    if matches!(args.sep, '\n' | '\r') {
        return Err(CliError::LineBreakSeparator(args.sep));
    }

    let mut stats = Stats::default();
    for line in input.lines() {
        let line = line.map_err(CliError::Read)?;
        let pieces = line.split_sep(&args.sep);
        debug!(line = stats.lines, pieces = pieces.len(), "split");

        let written = if args.count {
            writeln!(output, "{}", pieces.len())
        } else if args.per_line {
            writeln!(output, "{}", PerLine(&pieces))
        } else {
            writeln!(output, "{}", StrSep(&pieces, &args.delim))
        };
        written.map_err(CliError::Write)?;

        stats.lines += 1;
        stats.pieces += pieces.len();
    }
    output.flush().map_err(CliError::Write)?;
    Ok(stats)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args);

    match run(&args, io::stdin().lock(), io::stdout().lock()) {
        Ok(Stats { lines, pieces }) => {
            info!(lines, pieces, "done");
            ExitCode::SUCCESS
        }
        Err(CliError::Write(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("seqsplit: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_lines(argv: &[&str], input: &str) -> (Stats, String) {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = vec![];
        let stats = run(&args, input.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn sanity_check() {
        let (stats, out) =
            split_lines(&["seqsplit"], "a-b-c-d-e-f-g\nhello\n-a-\n");
        assert_eq!(out, "a\tb\tc\td\te\tf\tg\nhello\n\ta\t\n");
        assert_eq!(stats, Stats { lines: 3, pieces: 11 });
    }

    #[test]
    fn options() {
        let argv = ["seqsplit", "-s", ",", "-d", " | "];
        let (_, out) = split_lines(&argv, "x,,y");
        assert_eq!(out, "x |  | y\n");

        let (_, out) = split_lines(&["seqsplit", "--per-line"], "a--b\n");
        assert_eq!(out, "a\n\nb\n");

        let (stats, out) = split_lines(&["seqsplit", "-c"], "a--b\n\n-\n");
        assert_eq!(out, "3\n0\n2\n");
        assert_eq!(stats, Stats { lines: 3, pieces: 5 });
    }

    #[test]
    fn invalid_args() {
        assert!(Args::try_parse_from(["seqsplit", "-s", "ab"]).is_err());
        let argv = ["seqsplit", "-c", "--per-line"];
        assert!(Args::try_parse_from(argv).is_err());

        let args = Args::try_parse_from(["seqsplit", "-s", "\n"]).unwrap();
        let res = run(&args, "a\n".as_bytes(), io::sink());
        assert!(matches!(res, Err(CliError::LineBreakSeparator('\n'))));

        let argv = ["seqsplit", "-s", "\r", "-c"];
        let args = Args::try_parse_from(argv).unwrap();
        let res = run(&args, "a\r\r\n".as_bytes(), io::sink());
        assert!(matches!(res, Err(CliError::LineBreakSeparator('\r'))));
    }
}
