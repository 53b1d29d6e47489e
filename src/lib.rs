use std::ffi::OsString;

pub mod build_info;
pub mod cli;
pub mod commands;
pub mod error;
pub mod greeting;

use build_info::BuildInfo;
use cli::Invocation;
use error::CommandResult;
use greeting::Service;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Runs the CLI against explicit arguments (including the program name).
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    init_tracing();

    let message = output_for(args)?;
    println!("{}", message.trim_end());
    Ok(())
}

/// Parses the arguments and executes the selected command with the
/// production service, returning what should be written to stdout.
pub fn output_for<I, T>(args: I) -> CommandResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match cli::parse_from(args)? {
        Invocation::Print(text) => Ok(text),
        Invocation::Run(cli) => {
            let build = BuildInfo::current();
            let mut service = Service::new();
            commands::execute(&cli, &build, &mut service)
        }
    }
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
