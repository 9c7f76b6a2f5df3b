// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The boundary between the carver and the world.
//!
//! The core never decodes or encodes anything; it consumes a
//! [`PixelBuffer`] from a [`PixelSource`] and hands buffers (the final
//! carve, or an intermediate energy rendering) to a [`PixelSink`].
//! The implementations here lean on the `image` crate for the actual
//! codecs.

use crate::buffer::PixelBuffer;
use failure::{format_err, Error};
use std::path::PathBuf;

/// Anything that can produce the initial image.
pub trait PixelSource {
    /// Produce the buffer the carver will start from.
    fn acquire(&mut self) -> Result<PixelBuffer, Error>;
}

/// Anything that can accept a finished (or intermediate) buffer.
pub trait PixelSink {
    /// Accept a buffer for display or persistence.
    fn emit(&mut self, pixels: &PixelBuffer) -> Result<(), Error>;
}

/// Reads any format the `image` crate can decode, converted to RGBA8.
pub struct ImageFileSource {
    path: PathBuf,
}

impl ImageFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ImageFileSource { path: path.into() }
    }
}

impl PixelSource for ImageFileSource {
    fn acquire(&mut self) -> Result<PixelBuffer, Error> {
        let decoded = image::open(&self.path)?;
        let rgba = decoded.to_rgba();
        let (width, height) = rgba.dimensions();
        Ok(PixelBuffer::from_raw(width, height, rgba.into_raw())?)
    }
}

/// Writes a buffer to disk in the format implied by the target path's
/// extension.
pub struct ImageFileSink {
    path: PathBuf,
}

impl ImageFileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ImageFileSink { path: path.into() }
    }
}

impl PixelSink for ImageFileSink {
    fn emit(&mut self, pixels: &PixelBuffer) -> Result<(), Error> {
        let buf: image::RgbaImage =
            image::ImageBuffer::from_raw(pixels.width(), pixels.height(), pixels.as_raw().to_vec())
                .ok_or_else(|| format_err!("pixel buffer does not match its dimensions"))?;
        buf.save(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_sunk_buffer_can_be_sourced_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");

        #[rustfmt::skip]
        let bytes = vec![
            255, 0, 0, 255,    0, 255, 0, 255,
            0, 0, 255, 255,    255, 255, 255, 255,
        ];
        let original = PixelBuffer::from_raw(2, 2, bytes).unwrap();

        ImageFileSink::new(&path).emit(&original).unwrap();
        let reloaded = ImageFileSource::new(&path).acquire().unwrap();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn a_missing_file_surfaces_the_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = ImageFileSource::new(dir.path().join("nope.png"));
        assert!(source.acquire().is_err());
    }
}
