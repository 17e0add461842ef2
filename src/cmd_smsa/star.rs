use clap::*;
use smsa::libs::fmt::{parse_seq_list, write_rows};
use smsa::libs::msa::{self, RefineOptions};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("star")
        .about("Center-star multiple alignment with block refinement")
        .after_help(
            r###"
Aligns all input sequences with the center-star heuristic and then refines
poorly conserved column blocks until no block improves the score.

Steps:
* Every pair is globally aligned; the sequence with the highest total score
  becomes the center
* The other sequences are merged into the center, most similar first
* Runs of three or more non-conserved columns are realigned on their own and
  kept when their sum-of-pairs score improves

Output:
* The sum-of-pairs score, then the aligned rows in input order
* A blank line, then the refined score and rows (omitted with --no-refine)

Notes:
* Input is FASTA or a count line followed by one sequence per line
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* '-' is the gap symbol and must not occur in the input

Examples:
1. Align sequences with the default scores (3, -1, -2):
   smsa star tests/seqs/refine.txt

2. Custom scores:
   smsa star tests/seqs/refine.txt --match 2 --mismatch -3 --gap -4

3. Skip refinement:
   smsa star tests/seqs/refine.txt --no-refine

"###,
        )
        .arg(super::infile_arg())
        .arg(
            Arg::new("max_iter")
                .long("max-iter")
                .value_parser(builder::RangedU64ValueParser::<usize>::new().range(1..))
                .num_args(1)
                .default_value("100")
                .help("Maximum number of refinement passes, at least 1"),
        )
        .arg(
            Arg::new("no_refine")
                .long("no-refine")
                .action(ArgAction::SetTrue)
                .help("Only report the star alignment"),
        )
        .arg(super::outfile_arg());

    super::scoring_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let params = super::scoring_params(args);
    let options = RefineOptions {
        max_iterations: *args.get_one::<usize>("max_iter").unwrap(),
    };
    let no_refine = args.get_flag("no_refine");

    //----------------------------
    // Operating
    //----------------------------
    let text = smsa::read_to_string(infile)?;
    let records = parse_seq_list(&text, false)?;
    let seqs: Vec<Vec<u8>> = records.iter().map(|r| r.seq.clone()).collect();

    let report = msa::align(
        &seqs,
        &params,
        if no_refine { None } else { Some(&options) },
    )?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = smsa::writer(args.get_one::<String>("outfile").unwrap())?;

    writer.write_fmt(format_args!("{}\n", report.initial_score))?;
    write_rows(&mut writer, &records, report.initial.rows())?;

    if let Some(refined) = &report.refined {
        writer.write_all(b"\n")?;
        writer.write_fmt(format_args!("{}\n", refined.score()))?;
        write_rows(&mut writer, &records, refined.alignment.rows())?;
    }
    writer.flush()?;

    Ok(())
}
