//! Minimal PNG writer for single-color truecolor images.
//!
//! The output is the smallest legal layout: signature, `IHDR`, a single `IDAT`
//! holding the zlib-deflated scanlines, and `IEND`. Every scanline uses filter
//! type 0 and the image is never interlaced.

use flate2::{write::ZlibEncoder, Compression};
use std::io::Write;
use thiserror::Error;

pub const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const COMPRESSION_METHOD: u8 = 0;
const FILTER_METHOD: u8 = 0;
const INTERLACE_METHOD: u8 = 0;
const FILTER_NONE: u8 = 0;
const BYTES_PER_PIXEL: usize = 3;

/// Largest width or height a PNG header may carry.
const MAX_DIMENSION: u32 = (1 << 31) - 1;
const MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("image dimensions {width}x{height} exceed the PNG limit of 2^31-1")]
    DimensionTooLarge { width: u32, height: u32 },

    #[error("cannot allocate raw scanline data for a {width}x{height} image")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("{tag} chunk payload of {len} bytes exceeds the chunk length limit")]
    ChunkTooLarge { tag: String, len: usize },

    #[error("failed to deflate scanline data")]
    Compress(#[from] std::io::Error),
}

/// Encode a `width`x`height` image filled entirely with `rgb`.
///
/// The result is a complete PNG file (8-bit truecolor, no alpha). Output is
/// byte-for-byte reproducible for the same inputs.
pub fn encode_flat_rgb(width: u32, height: u32, rgb: [u8; 3]) -> Result<Vec<u8>, EncodeError> {
    validate_dimensions(width, height)?;

    let raw = flat_scanlines(width, height, rgb)?;
    let compressed = deflate(&raw)?;

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + 13 + compressed.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height))?;
    write_chunk(&mut png, b"IDAT", &compressed)?;
    write_chunk(&mut png, b"IEND", &[])?;

    Ok(png)
}

fn validate_dimensions(width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::ZeroDimension { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(EncodeError::DimensionTooLarge { width, height });
    }
    Ok(())
}

fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = COLOR_TYPE_RGB;
    data[10] = COMPRESSION_METHOD;
    data[11] = FILTER_METHOD;
    data[12] = INTERLACE_METHOD;
    data
}

/// Raw image data: each row is a filter byte followed by `width` copies of `rgb`.
fn flat_scanlines(width: u32, height: u32, rgb: [u8; 3]) -> Result<Vec<u8>, EncodeError> {
    let too_large = || EncodeError::ImageTooLarge { width, height };

    let row_len = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|len| len.checked_add(1))
        .ok_or_else(too_large)?;
    let total_len = row_len
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;

    let mut raw = Vec::new();
    raw.try_reserve_exact(total_len).map_err(|_| too_large())?;

    raw.push(FILTER_NONE);
    for _ in 0..width {
        raw.extend_from_slice(&rgb);
    }
    for _ in 1..height {
        raw.extend_from_within(..row_len);
    }

    Ok(raw)
}

fn deflate(raw: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Append one chunk: big-endian length, tag, payload, CRC-32 of tag and payload.
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) -> Result<(), EncodeError> {
    let len = chunk_length(tag, payload.len())?;

    let mut crc = crc32fast::Hasher::new();
    crc.update(tag);
    crc.update(payload);

    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    Ok(())
}

fn chunk_length(tag: &[u8; 4], len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len)
        .ok()
        .filter(|&len| len <= MAX_CHUNK_LEN)
        .ok_or_else(|| EncodeError::ChunkTooLarge {
            tag: String::from_utf8_lossy(tag).into_owned(),
            len,
        })
}
