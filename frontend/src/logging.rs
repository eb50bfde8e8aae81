use crate::config::{EXECUTABLE_TITLE, FILENAME_LOG};
use crate::error::Error;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Plain-text log sink: one line per record, truncated on startup.
///
/// Debug and trace records are dropped unless debug mode is on. Everything
/// else also goes to stderr.
pub struct Logger {
    file: Mutex<File>,
    debug: AtomicBool,
}

impl Logger {
    pub fn create(path: &Path, debug: bool) -> Result<Logger, Error> {
        let file = File::create(path).map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Logger {
            file: Mutex::new(file),
            debug: AtomicBool::new(debug),
        })
    }

    pub fn set_debug(&self, debug: bool) {
        self.debug.store(debug, Ordering::Relaxed);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info || self.debug.load(Ordering::Relaxed)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{}\n", record.args());
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
        if record.level() <= Level::Info {
            let _ = std::io::stderr().write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Where the log goes: the user data directory on unix, next to the
/// executable elsewhere. The directory is created if needed.
pub fn log_file_path() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let dir = dirs::data_local_dir().map(|mut p| {
        p.push(EXECUTABLE_TITLE);
        p
    });
    #[cfg(not(unix))]
    let dir = crate::config::exe_dir();

    let Some(dir) = dir else {
        return Err(Error::LogFile {
            path: PathBuf::from(FILENAME_LOG),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no directory available for the log file",
            ),
        });
    };
    std::fs::create_dir_all(&dir).map_err(|source| Error::LogFile {
        path: dir.clone(),
        source,
    })?;
    Ok(dir.join(FILENAME_LOG))
}

/// Creates the log file and installs it as the process-wide logger.
///
/// Must run before anything else logs; without a log file the launcher
/// shouldn't start, so callers are expected to exit on error.
pub fn init(debug: bool) -> Result<PathBuf, Error> {
    let path = log_file_path()?;
    let logger = Logger::create(&path, debug)?;
    log::set_boxed_logger(Box::new(logger)).map_err(|_| Error::LoggerInstalled)?;
    log::set_max_level(if debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    });
    if debug {
        println!("Debug mode enabled\nLog is outputted to {}", path.display());
    }
    Ok(path)
}
