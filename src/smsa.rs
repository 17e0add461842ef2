extern crate clap;
use clap::*;
use simplelog::{Config, LevelFilter, TermLogger, TerminalMode};

mod cmd_smsa;

fn main() -> anyhow::Result<()> {
    let app = Command::new("smsa")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`smsa` - Star Multiple Sequence Alignment")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .global(true)
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .default_value("warn")
                .help("Verbosity of the log written to stderr"),
        )
        .subcommand(cmd_smsa::star::make_subcommand())
        .subcommand(cmd_smsa::pair::make_subcommand())
        .subcommand(cmd_smsa::score::make_subcommand())
        .subcommand(cmd_smsa::semi::make_subcommand())
        .subcommand(cmd_smsa::profile::make_subcommand())
        .after_help(
            r###"Subcommands:

* Multiple alignment:
    * star  - Center-star alignment with block refinement
    * score - Sum-of-pairs score of an existing alignment

* Pairwise alignment:
    * pair  - Global alignment, gaps in the inputs allowed
    * semi  - Semi-global alignment, all co-optimal tracebacks

* Profiles:
    * profile - Best window of a query against a log-odds profile

Input is either FASTA or a sequence count followed by one sequence per line.

"###,
        );

    let matches = app.get_matches();

    let level = matches
        .get_one::<String>("log_level")
        .unwrap()
        .parse::<LevelFilter>()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("star", sub_matches)) => cmd_smsa::star::execute(sub_matches),
        Some(("pair", sub_matches)) => cmd_smsa::pair::execute(sub_matches),
        Some(("score", sub_matches)) => cmd_smsa::score::execute(sub_matches),
        Some(("semi", sub_matches)) => cmd_smsa::semi::execute(sub_matches),
        Some(("profile", sub_matches)) => cmd_smsa::profile::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
