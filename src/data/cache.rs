use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable selecting the cache root for downloaded datasets.
pub const DATA_DIR_ENV: &str = "VANILLADATA_DATA";

/// Directory under the user's home used when the environment variable is
/// unset.
const DEFAULT_DATA_DIR: &str = "vanilladata_data";

/// Resolve the on-disk cache directory for `dataset_name`.
///
/// The base directory is `data_dir` when given, otherwise the value of
/// `VANILLADATA_DATA`, otherwise `~/vanilladata_data`. The final segment is
/// `folder` when given, otherwise the dataset name. With `create_dir` set,
/// the directory and any missing parents are created; creation is
/// idempotent and an existing path is never an error.
pub fn get_dataset_dir(
    dataset_name: &str,
    data_dir: Option<&Path>,
    folder: Option<&str>,
    create_dir: bool,
) -> io::Result<PathBuf> {
    let base = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir()),
    };
    let dir = base.join(folder.unwrap_or(dataset_name));
    if create_dir && !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATA_DIR)
}
