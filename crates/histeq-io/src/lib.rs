//! histeq-io - Image loading and writing
//!
//! Decodes image files into a normalised 8-bit RGBA [`PixelBuffer`] and
//! encodes buffers (usually rendered frames) back to disk.
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | yes   | `jpeg`       |
//!
//! Other formats are recognised by [`detect_format`] but rejected with
//! [`IoError::UnsupportedFormat`].

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use histeq_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image file, detecting its format from the header bytes.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let buf = read_image_format(BufReader::new(file), format)?;
    log::info!(
        "loaded {} ({:?}, {}x{})",
        path.display(),
        format,
        buf.width(),
        buf.height()
    );
    Ok(buf)
}

/// Read an image held in memory, detecting its format from the header.
pub fn read_image_from_bytes(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        other => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!(
                "reading {:?} is not supported",
                other
            )))
        }
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    buf: &PixelBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(buf, &mut writer, format)?;
    writer.flush()?;
    log::debug!("wrote {} ({:?})", path.display(), format);
    Ok(())
}

/// Encode an image into a byte vector.
pub fn write_image_to_vec(buf: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_image_format(buf, &mut bytes, format)?;
    Ok(bytes)
}

fn write_image_format<W: Write>(
    buf: &PixelBuffer,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(buf, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(buf, writer, jpeg::DEFAULT_QUALITY),
        other => {
            let _ = (buf, writer);
            Err(IoError::UnsupportedFormat(format!(
                "writing {:?} is not supported",
                other
            )))
        }
    }
}
