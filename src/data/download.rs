use std::error::Error;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::{info, warn};

/// Bytes requested per read from the remote stream.
const CHUNK_SIZE: usize = 10_000_000;

/// Total assumed when the server reports no content length. Percentages are
/// computed against this placeholder and can exceed 100.
const FALLBACK_SIZE: u64 = 100;

/// Fetch `url` and stream the body to `local_fname`, defaulting to
/// `server_fname` in the current directory.
///
/// A status line is reported each time the cumulative percentage crosses the
/// next `progress_update_percentage` threshold. There is no retry and no
/// verification; network and filesystem errors propagate to the caller, and
/// a failed transfer leaves the partially written file behind.
pub fn download(
    url: &str,
    server_fname: &str,
    local_fname: Option<&Path>,
    progress_update_percentage: u64,
) -> Result<(), Box<dyn Error>> {
    let mut response = reqwest::blocking::get(url)?.error_for_status()?;
    let full_path = match local_fname {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(server_fname),
    };
    let file_size = match response.content_length() {
        Some(len) => len,
        None => {
            warn!("Cannot get file size, displaying bytes instead!");
            FALLBACK_SIZE
        }
    };
    info!("Downloading: {} Bytes: {}", server_fname, file_size);

    let mut f = File::create(&full_path)?;
    let pb = ProgressBar::new(file_size);
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut downloaded: u64 = 0;
    let mut threshold = 0f64;
    loop {
        let n = response.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        f.write_all(&buffer[..n])?;
        downloaded += n as u64;
        let pct = downloaded as f64 * 100.0 / file_size as f64;
        if pct > threshold {
            pb.set_position(downloaded.min(file_size));
            pb.set_message(progress_status(downloaded, file_size));
            threshold += progress_update_percentage as f64;
        }
    }
    pb.finish_with_message(progress_status(downloaded, file_size));
    Ok(())
}

/// Format one progress status line, e.g. `"      4096  [40.96%]"`.
fn progress_status(downloaded: u64, total: u64) -> String {
    let pct = downloaded as f64 * 100.0 / total as f64;
    format!("{:>10}  [{:.2}%]", downloaded, pct)
}
