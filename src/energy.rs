// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Gradient-magnitude energy.
//!
//! Convolves the luminance grid with the 3x3 Sobel kernel pair and
//! scores each pixel with `sqrt(Gx^2 + Gy^2)`.  High energy marks
//! content the carver must preserve; low energy marks pixels a seam
//! may cross cheaply.
//!
//! Border policy: samples that fall outside the grid clamp to the
//! nearest in-bounds pixel, so border pixels see a degenerate 3x3
//! neighborhood rather than zeros or sentinels.  A flat image thus
//! scores zero everywhere, borders included.
//!
//! Energies are plain `f64` comparisons fodder, never clamped to byte
//! range; only [`energy_to_buffer`] squashes them into pixels, and
//! only for display.

use crate::buffer::PixelBuffer;
use crate::cq;
use crate::grid::EnergyMap;
use num_traits::clamp;

type Kernel3 = [[f64; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

// One output row of the convolution.  Rows only ever read the
// luminance grid, so they are independent of each other; this is the
// unit both the sequential and the threaded drivers dispatch.
fn fill_energy_row(luma: &EnergyMap, y: u32, row: &mut [f64]) {
    let (mw, mh) = (luma.width() - 1, luma.height() - 1);
    let ys = [cq!(y == 0, 0, y - 1), y, cq!(y == mh, mh, y + 1)];
    for x in 0..luma.width() {
        let xs = [cq!(x == 0, 0, x - 1), x, cq!(x == mw, mw, x + 1)];
        let mut gx = 0.0;
        let mut gy = 0.0;
        for (i, &yy) in ys.iter().enumerate() {
            for (j, &xx) in xs.iter().enumerate() {
                let l = luma[(xx, yy)];
                gx += SOBEL_KERNEL_X[i][j] * l;
                gy += SOBEL_KERNEL_Y[i][j] * l;
            }
        }
        row[x as usize] = (gx * gx + gy * gy).sqrt();
    }
}

/// Compute the energy of every pixel in a luminance grid.
#[cfg(not(feature = "threaded"))]
pub fn sobel_energy(luma: &EnergyMap) -> EnergyMap {
    let (width, height) = (luma.width(), luma.height());
    let mut energy = EnergyMap::new(width, height);
    for (y, row) in energy.cells_mut().chunks_mut(width as usize).enumerate() {
        fill_energy_row(luma, y as u32, row);
    }
    energy
}

/// Compute the energy of every pixel in a luminance grid, fanning the
/// rows out in contiguous bands, one per worker.  Bit-identical to
/// the sequential pass: every row is computed the same way, and the
/// scope joins all workers before the map is returned.
#[cfg(feature = "threaded")]
pub fn sobel_energy(luma: &EnergyMap) -> EnergyMap {
    let (width, height) = (luma.width(), luma.height());
    let mut energy = EnergyMap::new(width, height);
    let workers = num_cpus::get().max(1);
    let band_rows = (height as usize + workers - 1) / workers;
    let row_len = width as usize;
    crossbeam::thread::scope(|scope| {
        for (band, cells) in energy.cells_mut().chunks_mut(band_rows * row_len).enumerate() {
            let top = (band * band_rows) as u32;
            scope.spawn(move |_| {
                for (dy, row) in cells.chunks_mut(row_len).enumerate() {
                    fill_energy_row(luma, top + dy as u32, row);
                }
            });
        }
    })
    .expect("energy worker panicked");
    energy
}

/// Render an energy map as a grayscale RGBA image, normalized so the
/// hottest pixel is white.  This is the one place energies are forced
/// into byte range, and it exists purely so a sink can show the map.
pub fn energy_to_buffer(energy: &EnergyMap) -> PixelBuffer {
    let factor = energy.cells().iter().cloned().fold(0.0f64, f64::max);
    let mut buf = PixelBuffer::zeroed(energy.width(), energy.height());
    for y in 0..energy.height() {
        let row = buf.row_mut(y);
        for x in 0..energy.width() {
            let e = energy[(x, y)];
            let v = cq!(factor > 0.0, clamp(e * 255.0 / factor, 0.0, 255.0) as u8, 0);
            row[x as usize * 4..x as usize * 4 + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    buf
}
