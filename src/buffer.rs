// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel buffer every stage reads from or replaces.
//!
//! Flat RGBA bytes, row-major, four bytes per pixel, no padding.  The
//! buffer is an owned value handed between stages, never a shared
//! surface: readers borrow it, and seam removal returns a brand-new,
//! narrower one.

use crate::errors::CarveError;

const BYTES_PER_PIXEL: usize = 4;

/// An owned RGBA image.  The length invariant
/// (`pixels.len() == width * height * 4`, both dimensions nonzero) is
/// checked once at construction and preserved by every operation, so
/// nothing downstream revalidates it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Take ownership of raw RGBA bytes.  This is the single place
    /// where a malformed buffer can be rejected.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CarveError> {
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidDimensions { width, height });
        }
        if pixels.len() != width as usize * height as usize * BYTES_PER_PIXEL {
            return Err(CarveError::MalformedBuffer {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    /// A zeroed buffer for stages that build their output row by row.
    pub(crate) fn zeroed(width: u32, height: u32) -> Self {
        PixelBuffer {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    // Keep the index math in one place; same row-major layout the
    // grid uses, times four bytes.
    fn get_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The four channels of a single pixel.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let index = self.get_index(x, y);
        [
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
            self.pixels[index + 3],
        ]
    }

    /// One row of raw bytes.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.get_index(0, y);
        &self.pixels[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.get_index(0, y);
        let end = start + self.width as usize * BYTES_PER_PIXEL;
        &mut self.pixels[start..end]
    }

    /// The whole backing store, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Unwrap into the backing store.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_buffer() {
        let buf = PixelBuffer::from_raw(2, 2, vec![0; 16]).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 2);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            PixelBuffer::from_raw(0, 2, vec![]),
            Err(CarveError::InvalidDimensions {
                width: 0,
                height: 2
            })
        );
        assert_eq!(
            PixelBuffer::from_raw(2, 0, vec![]),
            Err(CarveError::InvalidDimensions {
                width: 2,
                height: 0
            })
        );
    }

    #[test]
    fn rejects_a_length_mismatch() {
        assert_eq!(
            PixelBuffer::from_raw(2, 2, vec![0; 15]),
            Err(CarveError::MalformedBuffer {
                len: 15,
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn pixels_address_row_major() {
        #[rustfmt::skip]
        let bytes = vec![
            1, 2, 3, 4,       5, 6, 7, 8,
            9, 10, 11, 12,    13, 14, 15, 16,
        ];
        let buf = PixelBuffer::from_raw(2, 2, bytes).unwrap();
        assert_eq!(buf.rgba(0, 0), [1, 2, 3, 4]);
        assert_eq!(buf.rgba(1, 0), [5, 6, 7, 8]);
        assert_eq!(buf.rgba(0, 1), [9, 10, 11, 12]);
        assert_eq!(buf.rgba(1, 1), [13, 14, 15, 16]);
        assert_eq!(buf.row(1), &[9, 10, 11, 12, 13, 14, 15, 16][..]);
    }
}
