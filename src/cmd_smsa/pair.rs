use clap::*;
use smsa::libs::fmt::{parse_seq_list, write_rows};
use smsa::libs::msa::global_align;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("pair")
        .about("Global alignment of two sequences")
        .after_help(
            r###"
Globally aligns the first two input sequences with a linear gap score.

Either sequence may already contain gaps ('-'). Pairing any symbol with a
gap is scored as a gap, so a sequence can be aligned against a row of an
existing alignment.

Ties in the traceback prefer a match/mismatch, then a gap in the second
sequence, then a gap in the first one.

Output: the score, then the two aligned rows.

Examples:
1. Align two sequences:
   smsa pair tests/seqs/pair.txt

2. Custom scores:
   smsa pair tests/seqs/pair.txt -m 1 -n -1 -g -1

"###,
        )
        .arg(super::infile_arg())
        .arg(super::outfile_arg());

    super::scoring_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let params = super::scoring_params(args);

    let text = smsa::read_to_string(infile)?;
    let records = parse_seq_list(&text, true)?;
    if records.len() < 2 {
        anyhow::bail!("two sequences are needed, found {}", records.len());
    }

    let aln = global_align(&records[0].seq, &records[1].seq, &params);

    let mut writer = smsa::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_fmt(format_args!("{}\n", aln.score))?;
    write_rows(&mut writer, &records[..2], &[aln.x, aln.y])?;
    writer.flush()?;

    Ok(())
}
