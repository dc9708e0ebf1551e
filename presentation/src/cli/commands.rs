//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How a rendered summary is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text of the rendered summary
    #[default]
    Text,
    /// Rendered HTML fragment
    Html,
}

/// CLI arguments for pareto
#[derive(Parser, Debug)]
#[command(name = "pareto")]
#[command(author, version, about = "Summarize long text into its most valuable 20%")]
#[command(long_about = r#"
Pareto sends a text to a summarization backend and prints the markdown summary
it returns, rendered for the terminal.

Texts must be between 50 and 50,000 characters long.

Input is taken from (first match wins):
1. The TEXT argument
2. --file <PATH>       ("-" reads stdin)
3. stdin, when it is not a terminal
Otherwise the interactive form starts.

Configuration files are loaded from (in priority order):
1. PARETO_* environment variables (e.g. PARETO_API__URL)
2. --config <path>     Explicit config file
3. ./pareto.toml       Project-level config
4. ~/.config/pareto/config.toml   Global config

Example:
  pareto --file article.txt
  curl -s https://example.com/post.txt | pareto -m openai/gpt-4o-mini --copy
  pareto -i
"#)]
pub struct Cli {
    /// Text to summarize
    pub text: Option<String>,

    /// Read the text from a file ("-" for stdin)
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Model used by the backend (blank selects the default model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the summarization API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Print the summary markdown as returned, without rendering
    #[arg(long)]
    pub no_render: bool,

    /// Copy the summary to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Start the interactive form
    #[arg(short, long, conflicts_with_all = ["text", "file"])]
    pub interactive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and the character counter
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and effective values, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// True when the text comes from the command line rather than the form
    pub fn has_inline_input(&self) -> bool {
        self.text.is_some() || self.file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pareto"]).unwrap();
        assert!(cli.text.is_none());
        assert!(cli.model.is_none());
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.interactive);
        assert!(!cli.has_inline_input());
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::try_parse_from([
            "pareto",
            "-m",
            "openai/gpt-4o-mini",
            "--api-url",
            "http://localhost:8080/api",
            "--copy",
            "--no-render",
            "-o",
            "html",
            "-vv",
            "some text",
        ])
        .unwrap();

        assert_eq!(cli.text.as_deref(), Some("some text"));
        assert_eq!(cli.model.as_deref(), Some("openai/gpt-4o-mini"));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080/api"));
        assert!(cli.copy);
        assert!(cli.no_render);
        assert_eq!(cli.output, OutputFormat::Html);
        assert_eq!(cli.verbose, 2);
        assert!(cli.has_inline_input());
    }

    #[test]
    fn test_file_input() {
        let cli = Cli::try_parse_from(["pareto", "--file", "-"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("-")));
        assert!(cli.has_inline_input());
    }

    #[test]
    fn test_interactive_conflicts_with_inline_text() {
        assert!(Cli::try_parse_from(["pareto", "-i", "some text"]).is_err());
        assert!(Cli::try_parse_from(["pareto", "-i", "--file", "a.txt"]).is_err());
    }

    #[test]
    fn test_text_conflicts_with_file() {
        assert!(Cli::try_parse_from(["pareto", "--file", "a.txt", "some text"]).is_err());
    }
}
