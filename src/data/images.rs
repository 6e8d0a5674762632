use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::ImageError;
use ndarray::Array3;

/// Bundled sample images shipped beside the crate sources.
const IMAGES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/images");

/// Sample images together with their source paths and a description.
///
/// `images` and `filenames` are parallel vectors ordered by sorted file
/// name. The description is the bundled README for the default directory,
/// or a synthesized one-liner for a custom one.
pub struct SampleImages {
    pub images: Vec<Array3<u8>>,
    pub filenames: Vec<PathBuf>,
    pub description: String,
}

#[derive(Debug)]
pub enum SampleImageError {
    /// No filename in the collection ends with the requested name.
    NotFound { name: String },
    Io(io::Error),
    Decode(ImageError),
}

impl fmt::Display for SampleImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleImageError::NotFound { name } => {
                write!(f, "Cannot find sample image: {}", name)
            }
            SampleImageError::Io(e) => write!(f, "{}", e),
            SampleImageError::Decode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SampleImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleImageError::NotFound { .. } => None,
            SampleImageError::Io(e) => Some(e),
            SampleImageError::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for SampleImageError {
    fn from(e: io::Error) -> Self {
        SampleImageError::Io(e)
    }
}

impl From<ImageError> for SampleImageError {
    fn from(e: ImageError) -> Self {
        SampleImageError::Decode(e)
    }
}

/// Load every `.jpg` image in `read_dir` into memory.
///
/// With `read_dir` unset the bundled sample images are read and the
/// description is the bundled `README.txt` verbatim. `resize_shape` is a
/// `(width, height)` target applied to each image before conversion; when
/// unset each image keeps its native size. Filenames are sorted so the
/// collection order is stable across platforms.
pub fn load_sample_images(
    read_dir: Option<&Path>,
    resize_shape: Option<(u32, u32)>,
) -> Result<SampleImages, SampleImageError> {
    let (dir, description) = match read_dir {
        None => {
            let dir = PathBuf::from(IMAGES_DIR);
            let descr = fs::read_to_string(dir.join("README.txt"))?;
            (dir, descr)
        }
        Some(d) => (
            d.to_path_buf(),
            format!("Specially loaded dataset from {}", d.display()),
        ),
    };

    let mut filenames = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        let is_jpg = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".jpg"))
            .unwrap_or(false);
        if is_jpg {
            filenames.push(path);
        }
    }
    filenames.sort();

    let mut images = Vec::with_capacity(filenames.len());
    for path in &filenames {
        images.push(load_image(path, resize_shape)?);
    }

    Ok(SampleImages {
        images,
        filenames,
        description,
    })
}

/// Load a single sample image by name.
///
/// `image_name` is matched as a suffix of the full file path, so a bare
/// file name like `"logo.jpg"` works for any source directory. A name
/// matching no file yields [`SampleImageError::NotFound`].
pub fn load_sample_image(
    image_name: &str,
    read_dir: Option<&Path>,
    resize_shape: Option<(u32, u32)>,
) -> Result<Array3<u8>, SampleImageError> {
    let mut data = load_sample_images(read_dir, resize_shape)?;
    let index = data
        .filenames
        .iter()
        .position(|p| p.to_string_lossy().ends_with(image_name));
    match index {
        Some(i) => Ok(data.images.swap_remove(i)),
        None => Err(SampleImageError::NotFound {
            name: image_name.to_string(),
        }),
    }
}

/// Decode one JPEG into a (height, width, 3) byte array, resizing first
/// when a target shape is given. Grayscale input is normalized to RGB.
fn load_image(
    path: &Path,
    resize_shape: Option<(u32, u32)>,
) -> Result<Array3<u8>, SampleImageError> {
    let mut img = image::open(path)?;
    if let Some((w, h)) = resize_shape {
        img = img.resize_exact(w, h, FilterType::Triangle);
    }
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let array = Array3::from_shape_vec((h as usize, w as usize, 3), rgb.into_raw())
        .expect("RGB buffer length matches its dimensions");
    Ok(array)
}
