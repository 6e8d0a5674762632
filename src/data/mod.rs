pub mod cache;
pub mod download;
pub mod images;

pub use cache::{get_dataset_dir, DATA_DIR_ENV};
pub use download::download;
pub use images::{load_sample_image, load_sample_images, SampleImageError, SampleImages};
