//! Subcommand modules for the `smsa` binary.

pub mod pair;
pub mod profile;
pub mod score;
pub mod semi;
pub mod star;

use clap::*;
use smsa::libs::msa::ScoringParams;

/// Adds `--match`, `--mismatch` and `--gap`.
pub fn scoring_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("match")
            .long("match")
            .short('m')
            .value_parser(value_parser!(i32))
            .default_value("3")
            .allow_negative_numbers(true)
            .help("Score for matching symbols"),
    )
    .arg(
        Arg::new("mismatch")
            .long("mismatch")
            .short('n')
            .value_parser(value_parser!(i32))
            .default_value("-1")
            .allow_negative_numbers(true)
            .help("Score for mismatching symbols"),
    )
    .arg(
        Arg::new("gap")
            .long("gap")
            .short('g')
            .value_parser(value_parser!(i32))
            .default_value("-2")
            .allow_negative_numbers(true)
            .help("Score for a symbol against a gap"),
    )
}

pub fn scoring_params(args: &ArgMatches) -> ScoringParams {
    ScoringParams::new(
        *args.get_one::<i32>("match").unwrap(),
        *args.get_one::<i32>("mismatch").unwrap(),
        *args.get_one::<i32>("gap").unwrap(),
    )
}

pub fn infile_arg() -> Arg {
    Arg::new("infile")
        .required(true)
        .num_args(1)
        .index(1)
        .help("Input sequences. [stdin] for standard input")
}

pub fn outfile_arg() -> Arg {
    Arg::new("outfile")
        .long("outfile")
        .short('o')
        .num_args(1)
        .default_value("stdout")
        .help("Output filename. [stdout] for screen")
}
