// cli.rs - command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "terra-scene")]
#[command(about = "Headless demo of the scene motion core", long_about = None)]
pub struct Cli {
    /// Scene description JSON; omit for the built-in demo room
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 240)]
    pub frames: usize,
}
