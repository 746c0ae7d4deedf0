use std::path::PathBuf;

use clap::{
    crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command,
};

use crate::{
    config::Config,
    utils::{init_log, LogLevel},
};

/// Set up definition of command options for clap
fn cli_model() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("timestamp")
                .short('X')
                .long("timestamp")
                .value_parser(value_parser!(stderrlog::Timestamp))
                .value_name("GRANULARITY")
                .default_value("none")
                .help("Prepend log entries with a timestamp"),
        )
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("warn")
                .help("Set log level"),
        )
        .arg(
            Arg::new("quiet")
                .action(ArgAction::SetTrue)
                .long("quiet")
                .conflicts_with("loglevel")
                .help("Silence all output"),
        )
        .arg(
            Arg::new("bam")
                .short('b')
                .long("bam")
                .value_parser(value_parser!(PathBuf))
                .value_name("PATH")
                .required(true)
                .help("BAM file with all the mapped reads"),
        )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = cli_model().get_matches();

    // Setup logging
    init_log(&m);

    debug!("Processing command line options");

    let input = m
        .get_one::<PathBuf>("bam")
        .expect("Missing input file")
        .clone();

    Ok(Config::new(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_file_is_required() {
        let m = cli_model().try_get_matches_from(["count_mapped_reads"]);
        assert!(m.is_err());
    }

    #[test]
    fn input_file_from_short_and_long_options() {
        for args in [
            ["count_mapped_reads", "-b", "sample.bam"],
            ["count_mapped_reads", "--bam", "sample.bam"],
        ] {
            let m = cli_model()
                .try_get_matches_from(args)
                .expect("Failed to parse command line");
            assert_eq!(
                m.get_one::<PathBuf>("bam"),
                Some(&PathBuf::from("sample.bam"))
            );
        }
    }

    #[test]
    fn quiet_conflicts_with_loglevel() {
        let m = cli_model().try_get_matches_from([
            "count_mapped_reads",
            "-b",
            "sample.bam",
            "--quiet",
            "-l",
            "debug",
        ]);
        assert!(m.is_err());
    }
}
