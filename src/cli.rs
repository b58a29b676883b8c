use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, Command};

use super::utils::LogLevel;

// Java style tools take an open ended list of `--key=value` arguments.  Any
// argument, `-h`/`--help` included, belongs to the tool, so these subcommands
// have no help flag of their own (`help <SUBCOMMAND>` still works).
fn jar_command(name: &'static str, about: &'static str, help: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .disable_help_flag(true)
        .arg(passthrough_args(help))
}

fn passthrough_args(help: &'static str) -> Arg {
    Arg::new("args")
        .value_name("ARGS")
        .value_parser(value_parser!(String))
        .num_args(0..)
        .trailing_var_arg(true)
        .allow_hyphen_values(true)
        .help(help)
}

fn accession_arg() -> Arg {
    Arg::new("assembly_accession")
        .short('a')
        .long("assembly-accession")
        .value_parser(value_parser!(String))
        .value_name("ACCESSION")
        .required(true)
        .help("Assembly accession")
}

pub fn cli_model() -> Command {
    command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
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
                .default_value("info")
                .help("Set log level"),
        )
        .arg(
            Arg::new("quiet")
                .action(ArgAction::SetTrue)
                .long("quiet")
                .conflicts_with("loglevel")
                .help("Silence all output"),
        )
        .subcommand(jar_command(
            "clustering",
            "Pretend to be the clustering jar (writes the rs report in the current directory)",
            "Arguments for the clustering jar (echoed, otherwise ignored)",
        ))
        .subcommand(jar_command(
            "extraction",
            "Pretend to be the extraction jar called with fasta and taxonomy parameters",
            "Arguments for the extraction jar; needs --parameters.fasta= and --parameters.taxonomy=",
        ))
        .subcommand(jar_command(
            "extraction-fasta",
            "Pretend to be the extraction jar called with a fasta parameter only",
            "Arguments for the extraction jar; needs --parameters.fasta=",
        ))
        .subcommand(
            Command::new("genome-downloader")
                .about("Create empty assembly FASTA and report files in a per species directory")
                .arg(accession_arg())
                .arg(
                    Arg::new("species")
                        .short('s')
                        .long("species")
                        .value_parser(value_parser!(String))
                        .value_name("SPECIES")
                        .required(true)
                        .help("Scientific name of the species"),
                )
                .arg(
                    Arg::new("output_directory")
                        .short('o')
                        .long("output-directory")
                        .value_parser(value_parser!(PathBuf))
                        .value_name("DIR")
                        .default_value(".")
                        .help("Base output directory"),
                ),
        )
        .subcommand(
            Command::new("custom-assembly")
                .about("Create empty custom assembly FASTA and report files")
                .arg(accession_arg())
                .arg(
                    Arg::new("fasta_file")
                        .short('f')
                        .long("fasta-file")
                        .value_parser(value_parser!(PathBuf))
                        .value_name("FASTA_FILE")
                        .required(true)
                        .help("Assembly FASTA file"),
                )
                .arg(
                    Arg::new("report_file")
                        .short('r')
                        .long("report-file")
                        .value_parser(value_parser!(PathBuf))
                        .value_name("REPORT_FILE")
                        .required(true)
                        .help("Assembly report file"),
                )
                .arg(
                    Arg::new("no_rename")
                        .action(ArgAction::SetTrue)
                        .long("no-rename")
                        .help("Do not rename sequences to INSDC accessions"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_model() {
        cli_model().debug_assert();
    }

    #[test]
    fn test_passthrough_keeps_hyphenated_args() {
        let m = cli_model()
            .try_get_matches_from([
                "fake",
                "extraction",
                "--parameters.fasta=FOO_custom.fa",
                "-x",
                "plain",
                "--parameters.taxonomy=BAR",
            ])
            .unwrap();
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "extraction");
        let args: Vec<_> = sub.get_many::<String>("args").unwrap().cloned().collect();
        assert_eq!(
            args,
            [
                "--parameters.fasta=FOO_custom.fa",
                "-x",
                "plain",
                "--parameters.taxonomy=BAR"
            ]
        );
    }

    #[test]
    fn test_help_flags_are_passed_through() {
        for sub in ["clustering", "extraction", "extraction-fasta"] {
            for first in ["--help", "-h"] {
                let m = cli_model()
                    .try_get_matches_from(["fake", sub, first, "--parameters.fasta=A_custom.fa"])
                    .unwrap();
                let args: Vec<_> = m
                    .subcommand_matches(sub)
                    .unwrap()
                    .get_many::<String>("args")
                    .unwrap()
                    .cloned()
                    .collect();
                assert_eq!(args, [first, "--parameters.fasta=A_custom.fa"]);
            }
        }

        let m = cli_model()
            .try_get_matches_from(["fake", "clustering", "--help"])
            .unwrap();
        let args: Vec<_> = m
            .subcommand_matches("clustering")
            .unwrap()
            .get_many::<String>("args")
            .unwrap()
            .cloned()
            .collect();
        assert_eq!(args, ["--help"]);
    }

    #[test]
    fn test_help_still_available_for_options_subcommands() {
        let e = cli_model()
            .try_get_matches_from(["fake", "genome-downloader", "--help"])
            .unwrap_err();
        assert_eq!(e.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_global_options_before_subcommand() {
        let m = cli_model()
            .try_get_matches_from(["fake", "-l", "DEBUG", "clustering"])
            .unwrap();
        assert_eq!(m.get_one::<LogLevel>("loglevel"), Some(&LogLevel::Debug));
        assert_eq!(m.subcommand_name(), Some("clustering"));
        assert!(m.subcommand_matches("clustering").unwrap().get_many::<String>("args").is_none());
    }

    #[test]
    fn test_required_options() {
        assert!(cli_model().try_get_matches_from(["fake"]).is_err());
        assert!(cli_model()
            .try_get_matches_from(["fake", "genome-downloader", "-a", "GCA_1"])
            .is_err());
        let m = cli_model()
            .try_get_matches_from(["fake", "genome-downloader", "-a", "GCA_1", "-s", "Homo sapiens"])
            .unwrap();
        let sub = m.subcommand_matches("genome-downloader").unwrap();
        assert_eq!(sub.get_one::<PathBuf>("output_directory"), Some(&PathBuf::from(".")));
    }
}
