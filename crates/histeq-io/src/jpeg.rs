//! JPEG image format support
//!
//! Reads JPEG images with the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale, RGB and CMYK JPEGs are widened to opaque
//! RGBA; alpha is dropped on write.

use crate::{IoError, IoResult};
use histeq_core::{PixelBuffer, color};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::{Read, Write};

/// Default quality used by [`write_jpeg`].
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader positioned at the SOI marker (`FF D8`).
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let pixels: Vec<u32> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| color::compose_gray(g, 255)).collect(),
        // big-endian 16-bit samples, keep the high byte
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|s| color::compose_gray(s[0], 255))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|p| color::compose_rgb(p[0], p[1], p[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|p| {
                let (r, g, b) = cmyk_to_rgb(p[0], p[1], p[2], p[3]);
                color::compose_rgb(r, g, b)
            })
            .collect(),
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG pixel format {:?}",
                other
            )));
        }
    };

    Ok(PixelBuffer::from_data(width, height, pixels)?)
}

/// `(1 - c)(1 - k)` per channel, truncated.
fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> (u8, u8, u8) {
    let ink = |v: u8| ((255 - v as u32) * (255 - k as u32) / 255) as u8;
    (ink(c), ink(m), ink(y))
}

/// Write a JPEG image at the given quality (1..=100).
pub fn write_jpeg<W: Write>(buf: &PixelBuffer, writer: W, quality: u8) -> IoResult<()> {
    let too_large = || {
        IoError::InvalidData(format!(
            "{}x{} exceeds JPEG dimension limit",
            buf.width(),
            buf.height()
        ))
    };
    let width = u16::try_from(buf.width()).map_err(|_| too_large())?;
    let height = u16::try_from(buf.height()).map_err(|_| too_large())?;
    if buf.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode {}x{} image as JPEG",
            width, height
        )));
    }

    let encoder = jpeg_encoder::Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(
            &buf.to_rgba_bytes(),
            width,
            height,
            jpeg_encoder::ColorType::Rgba,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
