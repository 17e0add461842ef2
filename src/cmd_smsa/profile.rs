use clap::*;
use smsa::libs::fmt::parse_with_query;
use smsa::libs::msa::AlignedSet;
use smsa::libs::profile::{best_window, Profile};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("profile")
        .about("Best window of a query against a log-odds profile")
        .after_help(
            r###"
Builds a position-specific profile from rows of equal length and finds the
part of a query that fits it best.

Profile:
* Symbol frequencies per column, with a pseudocount of 2 added to every count
* Scores are log2 of a frequency over the mean frequency of that symbol

Search:
* Query windows from the profile width down to 3 residues are tried
* Shorter windows are widened with gaps in every possible way
* Candidates holding a symbol the rows never show cannot be scored

Input:
* Counted layout: the number of rows, the rows, then the query on its own line
* FASTA: the rows, then the query as the last record
* The rows may contain gaps

Output:
* The best candidate, widened to the profile width
* With --table, the log-odds table as TSV (column, then one field per symbol)

Examples:
1. Best window:
   smsa profile tests/seqs/profile.txt

2. Also print the profile:
   smsa profile tests/seqs/profile.txt --table

"###,
        )
        .arg(super::infile_arg())
        .arg(
            Arg::new("table")
                .long("table")
                .action(ArgAction::SetTrue)
                .help("Also print the log-odds table"),
        )
        .arg(super::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let is_table = args.get_flag("table");

    //----------------------------
    // Operating
    //----------------------------
    let text = smsa::read_to_string(infile)?;
    let (records, query) = parse_with_query(&text)?;
    let set = AlignedSet::new(records.into_iter().map(|r| r.seq).collect())?;

    let profile = Profile::build(&set);
    let hit = match best_window(&profile, &query.seq) {
        Some(hit) => hit,
        None => anyhow::bail!(
            "no window of the query can be scored against a profile of width {}",
            profile.width()
        ),
    };
    log::info!(
        "window {}..{} of the query scores {:.4}",
        hit.start,
        hit.start + hit.len,
        hit.score
    );

    //----------------------------
    // Output
    //----------------------------
    let mut writer = smsa::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_all(&hit.candidate)?;
    writer.write_all(b"\n")?;

    if is_table {
        let header: Vec<String> = profile
            .alphabet()
            .iter()
            .map(|&b| (b as char).to_string())
            .collect();
        writer.write_fmt(format_args!("col\t{}\n", header.join("\t")))?;

        for col in 0..profile.width() {
            let fields: Vec<String> = profile
                .alphabet()
                .iter()
                .filter_map(|&b| profile.get_score(col, b))
                .map(|score| format!("{:.4}", score))
                .collect();
            writer.write_fmt(format_args!("{}\t{}\n", col + 1, fields.join("\t")))?;
        }
    }
    writer.flush()?;

    Ok(())
}
