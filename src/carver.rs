// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The main seam carving loop.
//!
//! Runs grayscale -> gradient -> cumulative -> trace -> remove once
//! per requested seam, feeding each narrower buffer into the next
//! round.  The whole map is recalculated every time: removing a seam
//! changes the gradients along its path, so a cached energy map from
//! the previous round would steer later seams wrong.

// TODO: recompute only the columns a carve actually touched; the
// full per-iteration rebuild is where all the time goes.

use crate::buffer::PixelBuffer;
use crate::cumulative::accumulate;
use crate::energy::{energy_to_buffer, sobel_energy};
use crate::errors::CarveError;
use crate::grayscale::luminance_map;
use crate::seam::{remove_seam, trace_seam};
use log::debug;

/// A struct holding the image to be carved.  The buffer shrinks by
/// one column per removed seam; no other state survives an iteration.
pub struct SeamCarver {
    pixels: PixelBuffer,
}

impl SeamCarver {
    /// Take ownership of the image to be carved.
    pub fn new(pixels: PixelBuffer) -> Self {
        SeamCarver { pixels }
    }

    /// The current buffer, untouched.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Render the Sobel energy of the current buffer as a grayscale
    /// image, for emission through a sink.
    pub fn energy_preview(&self) -> PixelBuffer {
        energy_to_buffer(&sobel_energy(&luminance_map(&self.pixels)))
    }

    /// Remove exactly one seam.  Callers that need to stop early
    /// (progress UIs, cancellation) drive this directly; `carve` is
    /// just this in a loop.
    pub fn carve_one(&mut self) -> Result<(), CarveError> {
        let width = self.pixels.width();
        if width <= 1 {
            return Err(CarveError::WidthExhausted {
                requested: 1,
                width,
            });
        }
        let luma = luminance_map(&self.pixels);
        let energy = sobel_energy(&luma);
        let costs = accumulate(&energy)?;
        let seam = trace_seam(&costs);
        self.pixels = remove_seam(&self.pixels, &seam);
        Ok(())
    }

    /// Remove `seam_count` vertical seams and return the narrowed
    /// image.  Refuses up front, with the buffer unchanged, when the
    /// request would consume every column.
    pub fn carve(mut self, seam_count: u32) -> Result<PixelBuffer, CarveError> {
        let width = self.pixels.width();
        if seam_count >= width {
            return Err(CarveError::WidthExhausted {
                requested: seam_count,
                width,
            });
        }
        for n in 0..seam_count {
            self.carve_one()?;
            debug!(
                "removed seam {}/{}, width now {}",
                n + 1,
                seam_count,
                self.pixels.width()
            );
        }
        Ok(self.pixels)
    }
}

/// A convenience wrapper: carve `seam_count` seams out of an image in
/// one call.
pub fn seamcarve(pixels: PixelBuffer, seam_count: u32) -> Result<PixelBuffer, CarveError> {
    SeamCarver::new(pixels).carve(seam_count)
}
