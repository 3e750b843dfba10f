// image-resize/src/cli.rs
use crate::core::{ResizeAlgorithm, ResizeConfig};
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

/// Resize an image by a scale factor or to a target width and/or height
#[derive(Parser, Debug)]
#[command(name = "image-resize", version, about)]
pub struct Cli {
    /// Scale the image, incompatible with --height or --width
    #[arg(short = 's', long, value_parser = parse_scale)]
    pub scale: Option<f64>,

    /// Desired height of image (short form: -he)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Desired width of image
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Path to initial image
    #[arg(long = "image_dir", value_name = "PATH", allow_hyphen_values = true)]
    pub image_dir: PathBuf,

    /// Directory for the resized image [default: next to the initial image]
    #[arg(long = "output_dir", value_name = "DIR", allow_hyphen_values = true)]
    pub output_dir: Option<PathBuf>,

    /// Increase logging (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = Algorithm::Bicubic)]
    pub filter: Algorithm,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,
}

impl Cli {
    /// Parses the process arguments, accepting `-he` for `--height`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn into_config(self) -> ResizeConfig {
        ResizeConfig {
            scale: self.scale,
            width: self.width,
            height: self.height,
            image_path: self.image_dir,
            output_dir: self.output_dir,
            verbosity: self.verbose,
            algorithm: self.filter.into(),
            quality: self.quality,
        }
    }
}

fn parse_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;

    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("scale must be a positive number, got {}", value));
    }

    Ok(scale)
}

/// Flags whose value is the next token, which must never be rewritten.
const VALUE_FLAGS: [&str; 9] = [
    "-s",
    "--scale",
    "-w",
    "--width",
    "--height",
    "--image_dir",
    "--output_dir",
    "--filter",
    "--quality",
];

/// Rewrites the two-letter `-he` flag to `--height`, since clap short flags are
/// single characters and `-h` is taken by help. Handles `-he N`, `-he=N` and
/// `-heN`. Option values and anything after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        if index == 0 || passthrough || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(flag) if VALUE_FLAGS.contains(&flag) => {
                expects_value = true;
                None
            }
            Some("-he") => {
                expects_value = true;
                Some(OsString::from("--height"))
            }
            Some(flag) => flag.strip_prefix("-he").and_then(|rest| {
                let value = rest.strip_prefix('=').unwrap_or(rest);
                value
                    .starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
                    .then(|| OsString::from(format!("--height={}", value)))
            }),
            None => None,
        };

        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["image-resize"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(normalize_args(argv))
    }

    #[test]
    fn test_normalize_short_height() {
        assert_eq!(
            normalize_args(["prog", "-he", "50", "-w", "10"]),
            vec!["prog", "--height", "50", "-w", "10"]
        );
        assert_eq!(normalize_args(["prog", "-he=50"]), vec!["prog", "--height=50"]);
        assert_eq!(normalize_args(["prog", "-he50"]), vec!["prog", "--height=50"]);
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        assert_eq!(
            normalize_args(["prog", "-h", "--help", "-hello", "--", "-he"]),
            vec!["prog", "-h", "--help", "-hello", "--", "-he"]
        );
    }

    #[test]
    fn test_normalize_skips_option_values() {
        assert_eq!(
            normalize_args(["prog", "--image_dir", "-he5.png", "-he", "-he7"]),
            vec!["prog", "--image_dir", "-he5.png", "--height", "-he7"]
        );
        assert_eq!(
            normalize_args(["prog", "--output_dir", "-he9", "-he9"]),
            vec!["prog", "--output_dir", "-he9", "--height=9"]
        );
    }

    #[test]
    fn test_image_path_starting_with_he_flag() {
        let cli = parse(&["-w", "5", "--image_dir", "-he5.png"]).unwrap();
        assert_eq!(cli.image_dir, PathBuf::from("-he5.png"));
        assert_eq!(cli.height, None);
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = parse(&[
            "-he", "120", "-w", "80", "--image_dir", "in.png", "--output_dir", "out", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.height, Some(120));
        assert_eq!(cli.width, Some(80));
        assert_eq!(cli.scale, None);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));

        let config = cli.into_config();
        assert_eq!(config.image_path, PathBuf::from("in.png"));
        assert_eq!(config.algorithm, ResizeAlgorithm::Bicubic);
        assert_eq!(config.quality, 75);
    }

    #[test]
    fn test_parse_scale() {
        let cli = parse(&["-s", "0.5", "--image_dir", "in.png"]).unwrap();
        assert_eq!(cli.scale, Some(0.5));
    }

    #[test]
    fn test_image_dir_is_required() {
        assert!(parse(&["-s", "0.5"]).is_err());
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(parse(&["-s", "0", "--image_dir", "a.png"]).is_err());
        assert!(parse(&["-s", "-2", "--image_dir", "a.png"]).is_err());
        assert!(parse(&["-s", "big", "--image_dir", "a.png"]).is_err());
        assert!(parse(&["-w", "0", "--image_dir", "a.png"]).is_err());
        assert!(parse(&["-he", "-5", "--image_dir", "a.png"]).is_err());
        assert!(parse(&["--quality", "101", "--image_dir", "a.png"]).is_err());
    }

    #[test]
    fn test_scale_and_width_parse_but_fail_validation() {
        let config = parse(&["-s", "2", "-w", "10", "--image_dir", "a.png"])
            .unwrap()
            .into_config();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_filter_choice() {
        let cli = parse(&["-w", "5", "--filter", "lanczos3", "--image_dir", "a.png"]).unwrap();
        assert_eq!(ResizeAlgorithm::from(cli.filter), ResizeAlgorithm::Lanczos3);
    }
}
