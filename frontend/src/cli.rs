use crate::config::{self, EXECUTABLE_TITLE};
use crate::error::Error;
use clap::error::{ContextKind, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = EXECUTABLE_TITLE,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Args {
    /// Path to config file.
    #[arg(
        short,
        long,
        value_name = "PATH",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    config: Vec<PathBuf>,
    /// Enable debug messages.
    #[arg(short, long)]
    debug: bool,
    /// Show this help message.
    #[arg(short, long)]
    help: bool,
    /// Print version information.
    #[arg(short, long)]
    version: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub config_file: Option<PathBuf>,
    pub debug: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Run(Options),
    /// Help or version was printed and there's nothing left to do.
    Quit,
}

pub fn usage() -> String {
    Args::command().render_help().to_string()
}

pub fn version() -> String {
    format!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub fn print_usage() {
    println!("{}", usage());
}

pub fn print_version() {
    println!("{}", version());
}

/// Parses the command line, `args[0]` being the program name.
///
/// `--help` and `--version` print and quit, unless a config file was also
/// given, in which case the launcher goes on to start. `-c` takes the next
/// argument as is, even if it starts with `-`, and only the first `-c` counts.
pub fn handle_arguments<I, T>(args: I) -> Result<Action, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args).map_err(|e| {
        let arg = e
            .get(ContextKind::InvalidArg)
            .map(|v| v.to_string())
            .unwrap_or_else(|| e.kind().as_str().unwrap_or("argument").to_string());
        match e.kind() {
            ErrorKind::InvalidValue => Error::MissingValue(arg),
            _ => Error::InvalidArguments(arg),
        }
    })?;
    let config_file = args.config.into_iter().next();

    if args.version {
        print_version();
    }
    if args.help {
        print_usage();
    }
    if (args.version || args.help) && config_file.is_none() {
        return Ok(Action::Quit);
    }
    Ok(Action::Run(Options {
        config_file,
        debug: args.debug,
    }))
}

/// The config file named on the command line, or the first one found in the
/// search locations.
pub fn resolve_config_path(options: &Options) -> Result<PathBuf, Error> {
    match &options.config_file {
        Some(path) => Ok(path.clone()),
        None => config::find_config_file().ok_or(Error::NoConfigFile),
    }
}
