// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! RGBA to luminance.
//!
//! The gradient pass wants a single scalar per pixel, so the first
//! step of every iteration collapses the color channels to the
//! unweighted average `(R + G + B) / 3`.  Alpha is ignored.

use crate::buffer::PixelBuffer;
use crate::grid::EnergyMap;
use itertools::iproduct;

/// Compute the luminance grid for an image.  Total over any valid
/// buffer; a pure read.
pub fn luminance_map(pixels: &PixelBuffer) -> EnergyMap {
    let (width, height) = (pixels.width(), pixels.height());
    let cells = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let [r, g, b, _a] = pixels.rgba(x, y);
            (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
        })
        .collect();
    EnergyMap::from_vec(width, height, cells)
}
