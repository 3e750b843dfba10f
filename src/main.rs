use clap::error::ErrorKind;
use clap::CommandFactory;
use image_resize::{Cli, ResizeConfig, ResizePipeline};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(image_resize::log_level(cli.verbose))
        .format_timestamp(None)
        .try_init()?;

    let config = cli.into_config();
    if let Err(e) = config.validate() {
        Cli::command()
            .error(ErrorKind::ArgumentConflict, e.to_string())
            .exit();
    }

    process_resize(config);

    Ok(())
}

fn process_resize(config: ResizeConfig) {
    let pipeline = ResizePipeline::new(config);

    match pipeline.run() {
        Ok(path) => println!("Resized image location: {}", path.display()),
        Err(e) => {
            log::error!("{}", e);

            let config = pipeline.config();
            let output_dir = config
                .output_dir
                .as_deref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "Original image is damaged or output dir is wrong: {} {}",
                config.image_path.display(),
                output_dir
            );
        }
    }
}
