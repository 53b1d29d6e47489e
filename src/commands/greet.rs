use crate::cli::GreetArgs;
use crate::commands::format_args_list;
use crate::error::{CliError, CommandResult};
use crate::greeting::Greeter;

/// Returns the greeting for the provided arguments.
pub fn message<G>(args: &GreetArgs, greeter: &G) -> CommandResult<String>
where
    G: Greeter + ?Sized,
{
    if !args.args.is_empty() {
        return Err(CliError::usage(
            format!("Unexpected argument(s): {}", format_args_list(&args.args)),
            "The greet command doesn't accept positional arguments. Use --name flag instead",
        ));
    }

    Ok(greeter.greet(args.name.as_deref().unwrap_or_default()))
}
