//! File logging.
//!
//! The terminal is in raw mode while the game runs, so log records go to a
//! file under the platform data directory instead of stderr. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "skyward.log";

/// Directory the log file lives in.
pub fn log_dir() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "skyward").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

/// Log file path inside `dir`.
pub fn log_file_in(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

/// Install the global logger, appending to the log file.
///
/// Returns the file path on success. Calling it twice is an error.
pub fn init() -> io::Result<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir)?;
    let path = log_file_in(&dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    log::info!("skyward {} starting", crate::build_info::version_line());
    Ok(path)
}
