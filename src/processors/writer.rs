// image-resize/src/processors/writer.rs
use crate::core::{ImageResizeError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

pub struct Writer {
    quality: u8,
}

impl Writer {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Encodes `image` in the format named by the extension of `path` and writes it there.
    ///
    /// The parent directory has to exist already.
    pub fn write(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path)
            .map_err(|_| ImageResizeError::UnsupportedFormat(path.to_path_buf()))?;

        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        let data = self.encode(image, format)?;

        std::fs::write(path, &data).map_err(|source| ImageResizeError::Save {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Saved image: {} ({} bytes)", path.display(), data.len());
        Ok(())
    }

    pub fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        match format {
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
                // JPEG has no alpha and only 8-bit samples
                match image.color() {
                    ColorType::L8 | ColorType::Rgb8 => image.write_with_encoder(encoder)?,
                    _ => DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?,
                }
            }
            _ => image.write_to(&mut buffer, format)?,
        }

        Ok(buffer.into_inner())
    }
}
