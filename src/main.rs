use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod icon_gen;
mod png;

#[derive(Debug, Parser)]
#[clap(
    name = "launcher-icons",
    version,
    about = "Generate solid-color placeholder launcher icons under app/src/main/res"
)]
struct Args {}

fn main() -> Result<()> {
    Args::parse();

    icon_gen::generate_launcher_icons(Path::new(icon_gen::RES_DIR))
}
