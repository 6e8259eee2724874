//! Image format detection
//!
//! Input files are identified by their leading bytes, never by name.
//! Output files get their format from the extension.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image file format
///
/// Only [`ImageFormat::Png`] and [`ImageFormat::Jpeg`] can be decoded and
/// encoded; the others are recognised so they can be rejected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Unknown,
    Png,
    Jpeg,
    Bmp,
    Gif,
    Tiff,
    WebP,
}

impl ImageFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Tiff => "tif",
            Self::WebP => "webp",
        }
    }

    /// Guess the format from a path's extension, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return Self::Unknown;
        };
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            "tif" | "tiff" => Self::Tiff,
            "webp" => Self::WebP,
            _ => Self::Unknown,
        }
    }
}

/// Leading bytes of each recognised format.
const SIGNATURES: &[(&[u8], ImageFormat)] = &[
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (b"\xff\xd8\xff", ImageFormat::Jpeg),
    (b"BM", ImageFormat::Bmp),
    (b"GIF87a", ImageFormat::Gif),
    (b"GIF89a", ImageFormat::Gif),
    (b"II*\x00", ImageFormat::Tiff),
    (b"MM\x00*", ImageFormat::Tiff),
];

/// Detect the format of a file from its first bytes.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut header = Vec::with_capacity(12);
    File::open(path)?.take(12).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format of an in-memory image.
///
/// # Errors
///
/// [`IoError::InvalidData`] for fewer than two bytes,
/// [`IoError::UnsupportedFormat`] when no signature matches.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "{} bytes are not enough to detect a format",
            data.len()
        )));
    }

    if let Some(&(_, format)) = SIGNATURES.iter().find(|(sig, _)| data.starts_with(sig)) {
        return Ok(format);
    }
    // RIFF container, "WEBP" at offset 8
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Ok(ImageFormat::WebP);
    }

    Err(IoError::UnsupportedFormat("unknown image format".to_string()))
}
