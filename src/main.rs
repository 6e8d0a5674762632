use std::env;
use std::path::Path;

use vanilladata::{download, get_dataset_dir, load_sample_images, Config};
use vanilladata::{error, info};

fn main() {
    let mut config = Config::default();
    let mut args = Vec::new();
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                if let Some(path) = iter.next() {
                    config = Config::from_path(&path).unwrap_or_default();
                }
            }
            _ => args.push(arg),
        }
    }

    if args.is_empty() {
        eprintln!("Usage: vanilladata <mode> [--config file]");
        eprintln!("Modes: dir <dataset> [folder] | fetch <url> [local] | images [dir] [WxH]");
        return;
    }

    let mode = args[0].as_str();
    match mode {
        "dir" => {
            let Some(dataset) = args.get(1) else {
                eprintln!("dir mode needs a dataset name");
                return;
            };
            let base = config.data_dir.as_deref().map(Path::new);
            let folder = args.get(2).map(|s| s.as_str());
            match get_dataset_dir(dataset, base, folder, true) {
                Ok(dir) => info!("Dataset directory: {}", dir.display()),
                Err(e) => error!("Cannot resolve dataset directory: {}", e),
            }
        }
        "fetch" => {
            let Some(url) = args.get(1) else {
                eprintln!("fetch mode needs a URL");
                return;
            };
            let server_fname = url
                .rsplit('/')
                .next()
                .filter(|s| !s.is_empty())
                .unwrap_or("download");
            let local = args.get(2).map(|s| Path::new(s.as_str()));
            if let Err(e) = download(url, server_fname, local, config.progress_update_percentage) {
                error!("Download failed: {}", e);
            }
        }
        "images" => {
            let read_dir = args.get(1).map(|s| Path::new(s.as_str()));
            let resize = args.get(2).and_then(|s| parse_resize(s));
            match load_sample_images(read_dir, resize) {
                Ok(data) => {
                    info!("Loaded {} images", data.images.len());
                    for (img, name) in data.images.iter().zip(&data.filenames) {
                        let shape = img.shape();
                        info!("  {} {}x{}x{}", name.display(), shape[0], shape[1], shape[2]);
                    }
                }
                Err(e) => error!("Cannot load sample images: {}", e),
            }
        }
        _ => eprintln!("Unknown mode {}", mode),
    }
}

/// Parse a `WIDTHxHEIGHT` argument like `320x240`.
fn parse_resize(arg: &str) -> Option<(u32, u32)> {
    let (w, h) = arg.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}
