mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{normalize_args, Algorithm, Cli};
pub use self::core::{
    log_level, ImageResizeError, ResizeAlgorithm, ResizeConfig, ResizePipeline, Result,
};
pub use processors::{Loader, ResizeMode, Resizer, Writer};
pub use utils::{output_path, resized_file_name, rounded_aspect_ratio};
