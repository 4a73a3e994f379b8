use anyhow::{bail, Context, Result};
use image::{io::Reader as ImageReader, ColorType};
use std::path::{Path, PathBuf};

const DEFAULT_RES_DIR: &str = "app/src/main/res";

fn main() -> Result<()> {
    let mut paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        paths = launcher_icon_paths(Path::new(DEFAULT_RES_DIR))?;
    }
    if paths.is_empty() {
        bail!("No launcher icons found under {DEFAULT_RES_DIR}");
    }

    let mut failures = 0;
    for path in &paths {
        match verify_flat_icon(path) {
            Ok((width, height, [r, g, b])) => {
                println!("✓ {}: {width}x{height} RGB [{r}, {g}, {b}]", path.display())
            }
            Err(err) => {
                failures += 1;
                println!("⚠ {}: {err:#}", path.display());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} icons failed verification", paths.len());
    }
    Ok(())
}

/// Every PNG inside the `mipmap-*` folders of `res_dir`, sorted.
fn launcher_icon_paths(res_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = std::fs::read_dir(res_dir)
        .with_context(|| format!("Can't read {}", res_dir.display()))?;

    for entry in entries {
        let dir = entry?.path();
        let is_mipmap = dir
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("mipmap-"));
        if !is_mipmap || !dir.is_dir() {
            continue;
        }

        let files =
            std::fs::read_dir(&dir).with_context(|| format!("Can't read {}", dir.display()))?;
        for file in files {
            let path = file?.path();
            if path.extension().is_some_and(|ext| ext == "png") {
                paths.push(path);
            }
        }
    }

    paths.sort();
    Ok(paths)
}

/// Decode `path` and check it is an opaque RGB image of a single color.
fn verify_flat_icon(path: &Path) -> Result<(u32, u32, [u8; 3])> {
    let img = ImageReader::open(path)
        .context("Failed to open image")?
        .decode()
        .context("Failed to decode image")?;

    if img.color() != ColorType::Rgb8 {
        bail!("expected 8-bit RGB without alpha, found {:?}", img.color());
    }

    let rgb = img.to_rgb8();
    let first = *rgb.get_pixel(0, 0);
    if let Some((x, y, pixel)) = rgb.enumerate_pixels().find(|(_, _, p)| **p != first) {
        bail!(
            "pixel ({x}, {y}) is {:?}, expected flat fill {:?}",
            pixel.0,
            first.0
        );
    }

    Ok((rgb.width(), rgb.height(), first.0))
}
