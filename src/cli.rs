use std::ffi::OsString;

use clap::{error::ErrorKind as ClapErrorKind, Args, CommandFactory, Parser, Subcommand};

use crate::error::{CliError, CommandResult};

pub const HELP_SUGGESTION: &str = "Run 'hello-gopher --help' for usage information";

const LONG_ABOUT: &str = "Hello-Gopher is a friendly command-line tool that greets gophers by name
and shares random Go proverbs.";

const EXAMPLES: &str = "Examples:
  hello-gopher greet                    # Greet the default gopher
  hello-gopher greet --name Alice       # Greet Alice
  hello-gopher greet -n Bob             # Greet Bob (short flag)
  hello-gopher proverb                  # Display a random Go proverb
  hello-gopher --version                # Show version information";

/// Command-line arguments for the hello-gopher CLI.
#[derive(Debug, Parser)]
#[command(
    name = "hello-gopher",
    about = "A friendly CLI tool for Go enthusiasts",
    long_about = LONG_ABOUT,
    after_long_help = EXAMPLES,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Print version information
    #[arg(short = 'v', long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Greet a gopher by name
    #[command(
        long_about = "Greet a gopher by name. Without --name the default gopher is greeted.",
        after_long_help = "Examples:
  hello-gopher greet                    # Greet the default gopher
  hello-gopher greet --name Alice       # Greet Alice
  hello-gopher greet -n Bob             # Greet Bob using short flag"
    )]
    Greet(GreetArgs),

    /// Display a random Go proverb
    Proverb(ProverbArgs),

    /// Print version information
    Version(VersionArgs),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Debug, Clone, Default, Args)]
pub struct GreetArgs {
    /// Name to greet (default: Gopher)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Captured so they can be rejected with a clear message.
    #[arg(hide = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProverbArgs {
    #[arg(hide = true)]
    pub args: Vec<String>,
}

impl Command {
    /// Verb as typed on the command line.
    pub fn name(&self) -> &str {
        match self {
            Command::Greet(_) => "greet",
            Command::Proverb(_) => "proverb",
            Command::Version(_) => "version",
            Command::Unknown(args) => args.first().map(String::as_str).unwrap_or_default(),
        }
    }
}

/// Positional arguments are accepted and ignored.
#[derive(Debug, Clone, Default, Args)]
pub struct VersionArgs {
    #[arg(hide = true)]
    pub args: Vec<String>,
}

/// What the process should do after argument parsing.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// Text clap produced on its own, such as `--help` output.
    Print(String),
}

/// Parses process arguments, classifying clap failures into the CLI error taxonomy.
pub fn parse_from<I, T>(args: I) -> CommandResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(err) => classify(err),
    }
}

/// Full help text, as printed for `--help` or a bare invocation.
pub fn help_text() -> String {
    Cli::command().render_long_help().to_string()
}

fn classify(err: clap::Error) -> CommandResult<Invocation> {
    match err.kind() {
        ClapErrorKind::DisplayHelp
        | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ClapErrorKind::DisplayVersion => Ok(Invocation::Print(err.to_string())),
        ClapErrorKind::Io | ClapErrorKind::Format | ClapErrorKind::InvalidUtf8 => {
            Err(CliError::system(
                "Failed to parse command-line arguments",
                err,
                HELP_SUGGESTION,
            ))
        }
        _ => Err(CliError::usage(summary(&err), HELP_SUGGESTION)),
    }
}

/// First line of a clap error without its `error: ` prefix.
fn summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}
