// image-resize/src/core/mod.rs
mod pipeline;

pub use pipeline::ResizePipeline;

use image::imageops::FilterType;
use log::LevelFilter;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl ResizeAlgorithm {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Everything one invocation needs: which image, how to size it, where to put it.
#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub scale: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub image_path: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub verbosity: u8,
    pub algorithm: ResizeAlgorithm,
    /// JPEG quality, ignored for other output formats.
    pub quality: u8,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            scale: None,
            width: None,
            height: None,
            image_path: PathBuf::new(),
            output_dir: None,
            verbosity: 0,
            algorithm: ResizeAlgorithm::Bicubic,
            quality: 75,
        }
    }
}

impl ResizeConfig {
    /// Rejects argument combinations that must stop the program before any file is touched.
    ///
    /// Having no sizing argument at all is accepted here; the pipeline reports it
    /// as [`ImageResizeError::NoResizeRequested`].
    pub fn validate(&self) -> Result<()> {
        if self.scale.is_some() && (self.width.is_some() || self.height.is_some()) {
            return Err(ImageResizeError::InvalidParameter(
                "Incompatible program arguments: --scale cannot be combined with --width or --height"
                    .to_string(),
            ));
        }

        if let Some(scale) = self.scale {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ImageResizeError::InvalidParameter(format!(
                    "Scale must be a positive number, got {}",
                    scale
                )));
            }
        }

        if self.width == Some(0) || self.height == Some(0) {
            return Err(ImageResizeError::InvalidParameter(
                "Width and height must be positive".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(ImageResizeError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

/// Maps the `-v` count to a log level. Counts above 2 stay at debug.
pub fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

#[derive(Error, Debug)]
pub enum ImageResizeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to load image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No resize requested: none of --scale, --width or --height was given")]
    NoResizeRequested,

    #[error("Invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to save image {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ImageResizeError>;
