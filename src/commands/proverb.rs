use crate::cli::ProverbArgs;
use crate::commands::format_args_list;
use crate::error::{CliError, CommandResult};
use crate::greeting::{DataError, ProverbProvider};

/// Loads the proverb set and returns one proverb at random.
pub fn message<P>(args: &ProverbArgs, provider: &mut P) -> CommandResult<String>
where
    P: ProverbProvider + ?Sized,
{
    if !args.args.is_empty() {
        return Err(CliError::usage(
            format!("Unexpected argument(s): {}", format_args_list(&args.args)),
            "The proverb command doesn't accept any arguments",
        ));
    }

    // Load explicitly so a broken resource becomes a data error instead of text.
    provider.load_proverbs().map_err(load_failure)?;
    let pick = provider.random_proverb().map_err(load_failure)?;
    Ok(pick.proverb)
}

fn load_failure(err: DataError) -> CliError {
    CliError::data(
        "Failed to load Go proverbs",
        err,
        "This appears to be a data issue. Please check if the application was built correctly",
    )
}
