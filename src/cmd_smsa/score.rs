use clap::*;
use smsa::libs::fmt::parse_seq_list;
use smsa::libs::msa::{column_score, sum_of_pairs, AlignedSet};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("score")
        .about("Sum-of-pairs score of an alignment")
        .after_help(
            r###"
Scores an existing alignment. All rows must have the same length.

For every column and every pair of rows:
* equal symbols score --match
* different symbols score --mismatch
* a symbol against a gap scores --gap
* two gaps score 0

Examples:
1. Total score:
   smsa score tests/seqs/aligned.txt

2. Per-column scores as TSV (column, symbols, score, conserved):
   smsa score tests/seqs/aligned.txt --columns

"###,
        )
        .arg(super::infile_arg())
        .arg(
            Arg::new("columns")
                .long("columns")
                .action(ArgAction::SetTrue)
                .help("Also report every column"),
        )
        .arg(super::outfile_arg());

    super::scoring_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let params = super::scoring_params(args);
    let is_columns = args.get_flag("columns");

    let text = smsa::read_to_string(infile)?;
    let records = parse_seq_list(&text, true)?;
    let set = AlignedSet::new(records.into_iter().map(|r| r.seq).collect())?;

    let mut writer = smsa::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_fmt(format_args!("{}\n", sum_of_pairs(&set, &params)))?;

    if is_columns {
        for (idx, column) in set.columns().enumerate() {
            writer.write_fmt(format_args!(
                "{}\t{}\t{}\t{}\n",
                idx + 1,
                String::from_utf8_lossy(&column),
                column_score(&column, &params),
                set.is_conserved(idx)
            ))?;
        }
    }
    writer.flush()?;

    Ok(())
}
