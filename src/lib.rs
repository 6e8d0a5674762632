pub mod config;
pub mod data;
pub mod util;

pub use config::Config;
pub use data::cache::{get_dataset_dir, DATA_DIR_ENV};
pub use data::download::download;
pub use data::images::{load_sample_image, load_sample_images, SampleImageError, SampleImages};
