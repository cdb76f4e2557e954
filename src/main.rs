use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use lf_stack_rs::lf_pipeline::{HciFlattener, StackConfig, VideoFlattener};
use lf_stack_rs::logger;

#[derive(Parser)]
#[command(version, about = "Flatten light-field SAI datasets into stacked LFIs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct StackOpts {
    /// Dataset directory holding the sub-aperture images
    #[arg(long)]
    read_dir: PathBuf,

    /// Output directory, created if absent
    #[arg(long)]
    save_dir: PathBuf,

    /// Number of views to keep; must be a perfect square
    #[arg(long, default_value_t = 49)]
    target_n_sai: usize,

    /// Centered square crop applied to every view
    #[arg(long, default_value_t = 420)]
    img_size: usize,

    /// File extension of the sub-aperture images
    #[arg(long, default_value = "png")]
    img_format: String,
}

#[derive(Subcommand)]
enum Command {
    /// Flatten a grid-of-views dataset (HCI layout)
    Hci {
        #[command(flatten)]
        opts: StackOpts,

        /// Total number of views in the dataset
        #[arg(long, default_value_t = 80)]
        n_sai: usize,

        /// Output file name
        #[arg(long, default_value = "stacked.png")]
        name: String,
    },
    /// Flatten one frame of a video dataset with disparity maps
    Video {
        #[command(flatten)]
        opts: StackOpts,

        /// Total number of views in the dataset (9x9 grid)
        #[arg(long, default_value_t = 81)]
        n_sai: usize,

        /// Frame identifier, e.g. "000"
        #[arg(long, default_value = "000")]
        frame: String,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Hci { opts, n_sai, name } => {
            let config = build_config(&opts);
            info!(
                target_n_sai = config.target_n_sai,
                img_size = config.img_size,
                "Flattening HCI dataset"
            );
            let flattener = HciFlattener::new(config);
            let out = flattener.flatten(&opts.read_dir, &opts.save_dir, n_sai, &name)?;
            info!("{} saved", out.display());
        }
        Command::Video { opts, n_sai, frame } => {
            let config = build_config(&opts);
            info!(
                target_n_sai = config.target_n_sai,
                img_size = config.img_size,
                frame = %frame,
                "Flattening video frame"
            );
            let flattener = VideoFlattener::new(config);
            let outputs = flattener.flatten(&opts.read_dir, &opts.save_dir, n_sai, &frame)?;
            info!("{} saved", outputs.mosaic.display());
            info!("{} saved", outputs.disparity_stack.display());
            if let Some(center) = &outputs.center_disparity {
                info!("{} saved", center.display());
            }
        }
    }

    Ok(())
}

fn build_config(opts: &StackOpts) -> StackConfig {
    StackConfig::builder()
        .target_n_sai(opts.target_n_sai)
        .img_size(opts.img_size)
        .img_format(opts.img_format.clone())
        .build()
}
