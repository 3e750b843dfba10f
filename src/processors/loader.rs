// image-resize/src/processors/loader.rs
use crate::core::{ImageResizeError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the image at `path`, sniffing the format from its content.
    ///
    /// A missing file, an unreadable file and bytes no decoder accepts all come
    /// back as [`ImageResizeError::Load`].
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let load_error = |source: image::ImageError| ImageResizeError::Load {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(|e| load_error(image::ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| load_error(image::ImageError::IoError(e)))?
            .decode()
            .map_err(load_error)?;

        let (width, height) = image.dimensions();
        log::info!(
            "Loaded image: {}x{} pixels, color: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }
}
