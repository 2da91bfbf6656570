use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod placeholder;

#[derive(Debug, Parser)]
#[clap(
    name = "icon-placeholder",
    about = "Write SVG placeholder icons for the extension manifest"
)]
struct Args {
    /// Directory the placeholder files are written to.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = placeholder::PlaceholderConfig::chrome_extension(args.output);
    placeholder::generate_all(&config)
}
