// image-resize/src/processors/mod.rs
mod loader;
mod resizer;
mod writer;

pub use loader::Loader;
pub use resizer::{ResizeMode, Resizer};
pub use writer::Writer;

