pub mod greet;
pub mod proverb;
pub mod version;

use crate::build_info::BuildInfo;
use crate::cli::{help_text, Cli, Command, HELP_SUGGESTION};
use crate::error::{CliError, CommandResult};
use crate::greeting::{Greeter, ProverbProvider};

/// Dispatches execution to the appropriate command handler and returns the
/// text to print on stdout.
pub fn execute<S>(cli: &Cli, build: &BuildInfo, service: &mut S) -> CommandResult<String>
where
    S: Greeter + ProverbProvider,
{
    let Some(command) = &cli.command else {
        return Ok(if cli.version {
            version::message(build)
        } else {
            help_text()
        });
    };

    tracing::debug!(?command, "dispatching command");
    match command {
        Command::Unknown(_) => Err(unknown_command(command.name())),
        // The root version flag is not a flag of any verb.
        _ if cli.version => Err(CliError::usage(
            format!("unknown flag '--version' for command '{}'", command.name()),
            HELP_SUGGESTION,
        )),
        Command::Greet(args) => greet::message(args, &*service),
        Command::Proverb(args) => proverb::message(args, service),
        Command::Version(_) => Ok(version::message(build)),
    }
}

fn unknown_command(verb: &str) -> CliError {
    CliError::usage(
        format!("Unknown command: {verb}"),
        "Run 'hello-gopher --help' to see available commands",
    )
}

/// Formats positional arguments the way usage errors report them.
pub(crate) fn format_args_list(args: &[String]) -> String {
    format!("[{}]", args.join(", "))
}
