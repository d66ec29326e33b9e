// crates/cli/src/args.rs
use clap::{ArgAction, Args as ClapArgs, Parser, ValueEnum, ValueHint};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension counted when none is given on the command line.
pub const DEFAULT_EXTENSION: &str = "rs";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Progress while counting, then a human readable summary
    #[default]
    Text,
    /// A single JSON report, no progress
    Json,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "linesindir",
    version = crate::VERSION,
    about = "Count the lines of every matching file under a directory"
)]
pub struct Args {
    /// Directory whose files are counted (defaults to the current directory)
    #[arg(short = 'd', long = "directory", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// Extensions of the files to count (exact, case-sensitive, without the dot)
    #[arg(default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// Count every text file, whatever its extension
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    #[command(flatten)]
    pub walk: WalkArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Traversal options
#[derive(ClapArgs, Debug, Default)]
pub struct WalkArgs {
    /// Follow symbolic links
    #[arg(short = 'L', long = "follow", help_heading = "Traversal")]
    pub follow: bool,

    /// Maximum depth to descend (0 only looks at the directory itself)
    #[arg(long, help_heading = "Traversal")]
    pub max_depth: Option<usize>,

    /// Honor .gitignore and .ignore files
    #[arg(long = "gitignore", help_heading = "Traversal")]
    pub gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long = "no-hidden", help_heading = "Traversal")]
    pub no_hidden: bool,
}

/// Output options
#[derive(ClapArgs, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Print the line count of every file before the summary
    #[arg(long, help_heading = "Output")]
    pub list: bool,
}

/// Logging options
#[derive(ClapArgs, Debug, Default)]
pub struct Verbosity {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["linesindir"]).unwrap();
        assert_eq!(args.directory, None);
        assert_eq!(args.extensions, vec![DEFAULT_EXTENSION.to_string()]);
        assert!(!args.all);
        assert_eq!(args.output.format, OutputFormat::Text);
        assert_eq!(args.verbosity.verbose, 0);
    }

    #[test]
    fn test_short_flags_and_extensions() {
        let args = Args::try_parse_from(["linesindir", "-d", "src", "-a", "txt", "md", "-vv"]).unwrap();
        assert_eq!(args.directory, Some(PathBuf::from("src")));
        assert_eq!(args.extensions, vec!["txt".to_string(), "md".to_string()]);
        assert!(args.all);
        assert_eq!(args.verbosity.verbose, 2);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "linesindir",
            "--directory",
            "/tmp",
            "--all",
            "--follow",
            "--max-depth",
            "3",
            "--gitignore",
            "--no-hidden",
            "--format",
            "json",
            "--list",
        ])
        .unwrap();
        assert_eq!(args.directory, Some(PathBuf::from("/tmp")));
        assert!(args.walk.follow);
        assert_eq!(args.walk.max_depth, Some(3));
        assert!(args.walk.gitignore);
        assert!(args.walk.no_hidden);
        assert_eq!(args.output.format, OutputFormat::Json);
        assert!(args.output.list);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["linesindir", "-q", "-v"]).is_err());
    }
}
