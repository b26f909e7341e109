use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gradebook` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Gradebook - school records and grade analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path` from config)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};

    use super::subcommands::{GradeCommands, QueryCommands, TeacherCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "gradebook",
            "--format",
            "table",
            "--verbose",
            "query",
            "top-performers",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Query {
                action: QueryCommands::TopPerformers
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["gradebook", "teacher", "list", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Teacher {
                action: TeacherCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["gradebook", "--format", "xml", "report"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn grade_create_parses_date() {
        let cli = Cli::try_parse_from([
            "gradebook",
            "grade",
            "create",
            "--student-id",
            "3",
            "--subject-id",
            "2",
            "--grade",
            "7.5",
            "--date",
            "2024-05-01",
        ])
        .expect("cli should parse");

        let Commands::Grade {
            action:
                GradeCommands::Create {
                    student_id,
                    subject_id,
                    grade,
                    date,
                },
        } = cli.command
        else {
            panic!("expected grade create");
        };
        assert_eq!((student_id, subject_id), (3, 2));
        assert!((grade - 7.5).abs() < f64::EPSILON);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn grade_create_rejects_bad_date() {
        let parsed = Cli::try_parse_from([
            "gradebook",
            "grade",
            "create",
            "--student-id",
            "1",
            "--subject-id",
            "1",
            "--grade",
            "5",
            "--date",
            "01/05/2024",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn query_requires_its_ids() {
        let parsed = Cli::try_parse_from(["gradebook", "query", "last-session", "--group-id", "1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_ids_default_to_one() {
        let cli = Cli::try_parse_from(["gradebook", "report", "--group-id", "4"])
            .expect("cli should parse");
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.group_id, 4);
        assert_eq!(args.subject_id, 1);
        assert_eq!(args.teacher_id, 1);
        assert_eq!(args.student_id, 1);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["gradebook", "--database", "/tmp/demo.db", "seed"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.database.as_deref(), Some("/tmp/demo.db"));
    }
}
