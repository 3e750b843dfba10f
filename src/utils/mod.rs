// image-resize/src/utils/mod.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// `{stem}__{width}X{height}{.ext}` for the given source file.
///
/// The extension is carried over as-is and left off entirely when the
/// source has none.
pub fn resized_file_name(source: &Path, width: u32, height: u32) -> OsString {
    let mut name = source.file_stem().map(OsString::from).unwrap_or_default();
    name.push(format!("__{}X{}", width, height));

    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }

    name
}

/// Where the resized copy of `source` goes: `output_dir` when given, otherwise
/// next to the source.
pub fn output_path(source: &Path, output_dir: Option<&Path>, width: u32, height: u32) -> PathBuf {
    let location = match output_dir {
        Some(dir) => dir,
        None => source.parent().unwrap_or_else(|| Path::new("")),
    };

    location.join(resized_file_name(source, width, height))
}

/// Height over width, rounded to one decimal.
pub fn rounded_aspect_ratio(width: u32, height: u32) -> f64 {
    if width == 0 {
        return 0.0;
    }

    (height as f64 / width as f64 * 10.0).round() / 10.0
}
