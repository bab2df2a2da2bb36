//! Portrait image asset
//!
//! Loads the portrait overlaid at the leader node. The file is read fully
//! into memory once; a missing or unrecognized file is a fatal error for
//! the render step, with no fallback.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::error::Error;
use std::path::Path;

/// A raster image loaded into memory for SVG embedding
#[derive(Debug, Clone)]
pub struct Portrait {
    bytes: Vec<u8>,
    mime: &'static str,
}

impl Portrait {
    /// Load a portrait image from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a recognized
    /// raster format (PNG, JPEG, or GIF).
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let bytes = std::fs::read(path)
            .map_err(|e| format!("cannot read image file {}: {e}", path.display()))?;
        let mime = sniff_mime(&bytes).ok_or_else(|| {
            format!(
                "{} is not a supported raster image (expected PNG, JPEG, or GIF)",
                path.display()
            )
        })?;

        Ok(Self { bytes, mime })
    }

    /// Construct a portrait from raw bytes (caller supplies recognized data).
    ///
    /// # Errors
    /// Returns an error if the bytes are not a recognized raster format.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn Error>> {
        let mime = sniff_mime(&bytes)
            .ok_or("image bytes are not a supported raster format (PNG, JPEG, or GIF)")?;
        Ok(Self { bytes, mime })
    }

    /// MIME type detected from the image's magic bytes
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// Encode the image as a `data:` URI for inline SVG embedding
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Detect the MIME type from leading magic bytes
fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else {
        None
    }
}
