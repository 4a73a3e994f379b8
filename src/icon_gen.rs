use crate::png::encode_flat_rgb;
use anyhow::{Context, Result};
use std::{fs::create_dir_all, path::Path};

/// Android resource root, relative to the working directory.
pub const RES_DIR: &str = "app/src/main/res";

/// Navy fill used for every placeholder icon.
pub const ICON_COLOR: [u8; 3] = [26, 38, 136];

/// Launcher icon size in pixels for each density bucket.
pub const DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

pub const LAUNCHER_FILES: [&str; 2] = ["ic_launcher.png", "ic_launcher_round.png"];

/// Write `ic_launcher.png` and `ic_launcher_round.png` into every
/// `mipmap-<density>` folder under `res_dir`, overwriting existing files.
pub fn generate_launcher_icons(res_dir: &Path) -> Result<()> {
    println!("Generating Android launcher icons...");

    for (density, size) in DENSITIES {
        let mipmap_dir = res_dir.join(format!("mipmap-{density}"));
        create_dir_all(&mipmap_dir)
            .with_context(|| format!("Can't create directory {}", mipmap_dir.display()))?;

        let png = encode_flat_rgb(size, size, ICON_COLOR)
            .with_context(|| format!("Failed to encode {size}x{size} icon"))?;

        for name in LAUNCHER_FILES {
            let output_path = mipmap_dir.join(name);
            std::fs::write(&output_path, &png)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            println!("  ✓ Generated {} ({size}x{size})", output_path.display());
        }
    }

    println!("Icons generated successfully.");
    Ok(())
}
