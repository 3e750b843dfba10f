// image-resize/src/processors/resizer.rs
use crate::core::{ImageResizeError, ResizeAlgorithm, Result};
use crate::utils::rounded_aspect_ratio;
use image::DynamicImage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeMode {
    /// Multiply both edges by the factor.
    Scale(f64),
    /// Both edges given; aspect ratio is not preserved.
    Exact(u32, u32),
    /// Width given, height follows the original aspect ratio.
    Width(u32),
    /// Height given, width follows the original aspect ratio.
    Height(u32),
}

impl ResizeMode {
    /// `None` when no sizing option was supplied.
    pub fn from_options(scale: Option<f64>, width: Option<u32>, height: Option<u32>) -> Option<Self> {
        match (scale, width, height) {
            (Some(scale), _, _) => Some(ResizeMode::Scale(scale)),
            (None, Some(w), Some(h)) => Some(ResizeMode::Exact(w, h)),
            (None, Some(w), None) => Some(ResizeMode::Width(w)),
            (None, None, Some(h)) => Some(ResizeMode::Height(h)),
            (None, None, None) => None,
        }
    }
}

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn resize(&self, image: DynamicImage, mode: ResizeMode) -> Result<DynamicImage> {
        let original = (image.width(), image.height());
        log::debug!("Original image {}x{}", original.0, original.1);

        let (width, height) = Self::target_dimensions(original, mode);

        if matches!(mode, ResizeMode::Width(_) | ResizeMode::Height(_)) {
            Self::check_aspect_ratio(original, (width, height));
        }

        if width == 0 || height == 0 {
            return Err(ImageResizeError::InvalidDimensions { width, height });
        }

        if (width, height) == original {
            log::debug!("Image dimensions unchanged, skipping resize");
            return Ok(image);
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} with {:?}",
            original.0,
            original.1,
            width,
            height,
            self.algorithm
        );

        Ok(image.resize_exact(width, height, self.algorithm.filter_type()))
    }

    /// New `(width, height)` for an image of `original` size. Fractional
    /// results are truncated toward zero.
    pub fn target_dimensions(original: (u32, u32), mode: ResizeMode) -> (u32, u32) {
        let (orig_width, orig_height) = original;

        match mode {
            ResizeMode::Scale(scale) => (
                (orig_width as f64 * scale).floor() as u32,
                (orig_height as f64 * scale).floor() as u32,
            ),
            ResizeMode::Exact(width, height) => (width, height),
            ResizeMode::Width(width) => {
                let ratio = width as f64 / orig_width as f64;
                (width, (orig_height as f64 * ratio).floor() as u32)
            }
            ResizeMode::Height(height) => {
                let ratio = height as f64 / orig_height as f64;
                ((orig_width as f64 * ratio).floor() as u32, height)
            }
        }
    }

    /// Warns when the target's one-decimal aspect ratio drifts from the
    /// original's. Advisory only.
    pub fn check_aspect_ratio(original: (u32, u32), target: (u32, u32)) -> bool {
        let current = rounded_aspect_ratio(original.0, original.1);
        let expected = rounded_aspect_ratio(target.0, target.1);

        if current != expected {
            log::warn!(
                "Aspect ratio changes from {:.1} to {:.1} ({}x{} -> {}x{})",
                current,
                expected,
                original.0,
                original.1,
                target.0,
                target.1
            );
            return false;
        }

        true
    }
}
