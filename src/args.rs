use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Frame JSON file, or a directory of them (rendered in name order)
    pub input: PathBuf,

    /// Output PNG, or a directory when the input is a directory
    #[arg(short, long, default_value = "overlay.png")]
    pub output: PathBuf,

    /// Configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Image to draw over; also fixes the surface size
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Surface width when no background is given
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Surface height when no background is given
    #[arg(long, default_value_t = 640)]
    pub height: u32,

    /// Override the configured class threshold
    #[arg(short, long)]
    pub threshold: Option<f32>,
}
