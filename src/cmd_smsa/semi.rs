use clap::*;
use smsa::libs::fmt::parse_seq_list;
use smsa::libs::semi::semi_global;
use smsa::libs::sub_matrix::SubMatrix;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("semi")
        .about("Semi-global alignment with all co-optimal tracebacks")
        .after_help(
            r###"
Aligns the first two input sequences semi-globally: leading and trailing
overhangs of either sequence are not penalized.

Every optimal alignment is reported, from every optimal end cell and through
every tied move of the traceback.

Output: the score, then each alignment as two rows. Alignments are sorted
and duplicates removed.

Notes:
* Scores come from a substitution matrix, PAM250 by default
* --matrix also accepts a file in BLAST matrix format
* Residues missing from the matrix are rejected

Examples:
1. Default PAM250 and gap -9:
   smsa semi tests/seqs/semi.txt

2. Custom gap score:
   smsa semi tests/seqs/semi.txt --gap -5

"###,
        )
        .arg(super::infile_arg())
        .arg(
            Arg::new("matrix")
                .long("matrix")
                .num_args(1)
                .default_value("pam250")
                .help("Substitution matrix preset or file"),
        )
        .arg(
            Arg::new("gap")
                .long("gap")
                .short('g')
                .value_parser(value_parser!(i32))
                .default_value("-9")
                .allow_negative_numbers(true)
                .help("Score for a residue against a gap"),
        )
        .arg(super::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let gap = *args.get_one::<i32>("gap").unwrap();
    let matrix = SubMatrix::from_name(args.get_one::<String>("matrix").unwrap())?;

    let text = smsa::read_to_string(infile)?;
    let records = parse_seq_list(&text, false)?;
    if records.len() < 2 {
        anyhow::bail!("two sequences are needed, found {}", records.len());
    }
    for (idx, record) in records[..2].iter().enumerate() {
        if let Some(&b) = record.seq.iter().find(|&&b| !matrix.contains(b)) {
            anyhow::bail!(
                "sequence {} holds the residue '{}' missing from the matrix",
                idx + 1,
                b as char
            );
        }
    }

    let res = semi_global(&records[0].seq, &records[1].seq, &matrix, gap);
    log::info!("{} co-optimal alignments", res.alignments.len());

    let mut writer = smsa::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_fmt(format_args!("{}\n", res.score))?;
    for (row1, row2) in &res.alignments {
        writer.write_all(row1)?;
        writer.write_all(b"\n")?;
        writer.write_all(row2)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(())
}
