//! PNG image format support
//!
//! Every PNG flavour is normalised to 8-bit RGBA on read: palettes and
//! low bit depths are expanded, 16-bit samples are stripped to 8 bits,
//! and gray / gray-alpha / RGB are widened to four channels.

use crate::{IoError, IoResult};
use histeq_core::{PixelBuffer, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let width = output_info.width;
    let height = output_info.height;
    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output color type: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize * samples];
        for p in row.chunks_exact(samples) {
            let pixel = match p {
                [g] => color::compose_gray(*g, 255),
                [g, a] => color::compose_gray(*g, *a),
                [r, g, b] => color::compose_rgb(*r, *g, *b),
                _ => color::compose_rgba(p[0], p[1], p[2], p[3]),
            };
            pixels.push(pixel);
        }
    }

    Ok(PixelBuffer::from_data(width, height, pixels)?)
}

/// Write an 8-bit RGBA PNG image
pub fn write_png<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    if buf.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode {}x{} image as PNG",
            buf.width(),
            buf.height()
        )));
    }

    let mut encoder = Encoder::new(writer, buf.width(), buf.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&buf.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
