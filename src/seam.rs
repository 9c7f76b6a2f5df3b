// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam tracing and removal.
//!
//! Tracing is a single minimum-cost path extraction: pick the
//! cheapest bottom-row cell and walk the recorded back-pointers to
//! the top.  Because every back-pointer targets one of the three
//! horizontally adjacent cells in the row above, the result moves at
//! most one column per row without any further checking.

use crate::buffer::PixelBuffer;
use crate::grid::CumulativeMap;

const BYTES_PER_PIXEL: usize = 4;

/// The column to remove from each row, ordered row 0 to row
/// height - 1.
pub type Seam = Vec<u32>;

/// Given a cumulative map, return the list of x-coordinates that,
/// when zipped with the range (0..height), give the XY coordinates of
/// the cheapest top-to-bottom seam.
pub fn trace_seam(costs: &CumulativeMap) -> Seam {
    let (width, height) = (costs.width(), costs.height());

    // Find the x coordinate of the bottommost seam with the least
    // energy; strict `<` keeps the leftmost on ties, matching the
    // back-pointer tie-break.
    let mut seam_col = 0;
    for x in 1..width {
        if costs[(x, height - 1)].energy < costs[(seam_col, height - 1)].energy {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = costs[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Remove one seam from an image, producing a buffer exactly one
/// column narrower.  Row `y` keeps everything left of `seam[y]`
/// verbatim and shifts everything right of it one pixel left, so the
/// removed column index can differ per row.
pub fn remove_seam(pixels: &PixelBuffer, seam: &[u32]) -> PixelBuffer {
    let (width, height) = (pixels.width(), pixels.height());
    debug_assert_eq!(seam.len(), height as usize);

    let mut narrower = PixelBuffer::zeroed(width - 1, height);
    for y in 0..height {
        let src = pixels.row(y);
        let dst = narrower.row_mut(y);
        let cut = seam[y as usize] as usize * BYTES_PER_PIXEL;
        dst[..cut].copy_from_slice(&src[..cut]);
        dst[cut..].copy_from_slice(&src[cut + BYTES_PER_PIXEL..]);
    }
    narrower
}
