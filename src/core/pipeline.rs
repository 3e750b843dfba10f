// image-resize/src/core/pipeline.rs
use super::{ImageResizeError, ResizeConfig, Result};
use crate::processors::{Loader, ResizeMode, Resizer, Writer};
use crate::utils::output_path;
use std::path::PathBuf;

/// Runs load, resize and write for one configured image.
pub struct ResizePipeline {
    config: ResizeConfig,
    loader: Loader,
    resizer: Resizer,
    writer: Writer,
}

impl ResizePipeline {
    pub fn new(config: ResizeConfig) -> Self {
        let resizer = Resizer::new(config.algorithm);
        let writer = Writer::new(config.quality);

        Self {
            config,
            loader: Loader::new(),
            resizer,
            writer,
        }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Returns the path of the written image.
    pub fn run(&self) -> Result<PathBuf> {
        let source = self.config.image_path.as_path();
        let image = self.loader.load(source)?;

        let mode = ResizeMode::from_options(self.config.scale, self.config.width, self.config.height)
            .ok_or(ImageResizeError::NoResizeRequested)?;

        let resized = self.resizer.resize(image, mode)?;

        let destination = output_path(
            source,
            self.config.output_dir.as_deref(),
            resized.width(),
            resized.height(),
        );
        self.writer.write(&resized, &destination)?;

        Ok(destination)
    }
}
