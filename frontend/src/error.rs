use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The config file couldn't be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The log file couldn't be created.
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A logger was already installed for this process.
    LoggerInstalled,
    /// No config file in any of the search locations.
    NoConfigFile,
    /// Command line arguments couldn't be parsed.
    InvalidArguments(String),
    /// An option that takes a value was given none.
    MissingValue(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "Failed to read config file {}: {}", path.display(), source)
            }
            Error::LogFile { path, source } => {
                write!(f, "Failed to create log file {}: {}", path.display(), source)
            }
            Error::LoggerInstalled => write!(f, "Logging was already initialized"),
            Error::NoConfigFile => write!(f, "No config file found"),
            Error::InvalidArguments(arg) => write!(f, "Unrecognized option {}", arg),
            Error::MissingValue(arg) => write!(f, "Option {} requires a value", arg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } | Error::LogFile { source, .. } => Some(source),
            _ => None,
        }
    }
}
