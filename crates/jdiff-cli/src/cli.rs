use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jdiff",
    about = "Side-by-side structural diff for JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Settings file (default: $JDIFF_CONFIG or .jdiff.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents side by side
    Compare(CompareArgs),
    /// Print a document in canonical form
    Format(FormatArgs),
    /// Check whether two documents have comparable structure
    Check(CheckArgs),
    /// Get or set view settings
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Left document, or `-` for stdin
    pub left: PathBuf,
    /// Right document, or `-` for stdin
    pub right: PathBuf,
    #[arg(long)]
    pub no_summary: bool,
    /// Unchanged rows to keep around each change
    #[arg(short = 'C', long)]
    pub context: Option<usize>,
    /// Width of each column
    #[arg(short, long)]
    pub width: Option<usize>,
    #[arg(long)]
    pub no_color: bool,
    /// Diff the text as-is, without canonicalizing
    #[arg(long)]
    pub raw: bool,
    /// Exit with status 1 when the documents differ
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Args)]
pub struct FormatArgs {
    /// Document to format, or `-` for stdin
    pub file: PathBuf,
}

#[derive(Args)]
pub struct CheckArgs {
    pub left: PathBuf,
    pub right: PathBuf,
}

#[derive(Args)]
pub struct ConfigArgs {
    pub key: Option<String>,
    pub value: Option<String>,
    /// Restore every setting to its default
    #[arg(long, conflicts_with_all = ["key", "value"])]
    pub reset: bool,
    /// Widen the columns one character per repetition
    #[arg(long, action = clap::ArgAction::Count, conflicts_with_all = ["key", "value", "reset", "narrow", "reset_width"])]
    pub widen: u8,
    /// Narrow the columns one character per repetition
    #[arg(long, action = clap::ArgAction::Count, conflicts_with_all = ["key", "value", "reset", "reset_width"])]
    pub narrow: u8,
    /// Restore the default column width
    #[arg(long, conflicts_with_all = ["key", "value", "reset"])]
    pub reset_width: bool,
}

impl ConfigArgs {
    /// Returns `true` if any column width step was requested.
    pub fn steps_width(&self) -> bool {
        self.widen > 0 || self.narrow > 0 || self.reset_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from(["jdiff", "compare", "a.json", "b.json"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.left, PathBuf::from("a.json"));
            assert_eq!(args.right, PathBuf::from("b.json"));
            assert!(!args.raw);
            assert_eq!(args.context, None);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_compare_options() {
        let cli = Cli::try_parse_from([
            "jdiff", "compare", "a", "b", "-C", "2", "--width", "40", "--no-color",
            "--no-summary", "--exit-code",
        ])
        .unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.context, Some(2));
            assert_eq!(args.width, Some(40));
            assert!(args.no_color);
            assert!(args.no_summary);
            assert!(args.exit_code);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn compare_needs_two_documents() {
        assert!(Cli::try_parse_from(["jdiff", "compare", "a.json"]).is_err());
    }

    #[test]
    fn parse_format() {
        let cli = Cli::try_parse_from(["jdiff", "format", "-"]).unwrap();
        if let Command::Format(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("-"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["jdiff", "check", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn parse_config_set() {
        let cli = Cli::try_parse_from(["jdiff", "config", "column_width", "80"]).unwrap();
        if let Command::Config(args) = cli.command {
            assert_eq!(args.key, Some("column_width".into()));
            assert_eq!(args.value, Some("80".into()));
            assert!(!args.reset);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_width_steps() {
        let cli = Cli::try_parse_from(["jdiff", "config", "--widen", "--widen"]).unwrap();
        if let Command::Config(args) = cli.command {
            assert_eq!(args.widen, 2);
            assert!(args.steps_width());
        } else { panic!("wrong command"); }
        assert!(Cli::try_parse_from(["jdiff", "config", "--widen", "--narrow"]).is_err());
        assert!(Cli::try_parse_from(["jdiff", "config", "--reset-width", "column_width"]).is_err());
    }

    #[test]
    fn reset_conflicts_with_key() {
        assert!(Cli::try_parse_from(["jdiff", "config", "--reset", "color"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "jdiff", "--verbose", "--format", "json", "--config", "x.toml", "check", "a", "b",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
