// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dynamic-programming pass.
//!
//! Builds, row by row, the minimum total energy of any 8-connected
//! path from the top of the image to each pixel, recording for every
//! cell which of its two or three predecessors won.  Each row depends
//! only on the row above it, which is what makes the single top-down
//! sweep sufficient: once a row is filled, its values are the true
//! minimum path costs, not estimates.

use crate::cq;
use crate::errors::CarveError;
use crate::grid::{CumulativeMap, EnergyAndBackPointer, EnergyMap};

/// Accumulate an energy map into a cumulative map plus back-pointers.
///
/// Predecessors that would fall outside the grid are excluded from
/// the minimum rather than padded with zeros or infinities.  Ties go
/// to the leftmost predecessor; together with the leftmost bottom-row
/// minimum in the seam trace, that makes the chosen seam fully
/// deterministic.
pub fn accumulate(energy: &EnergyMap) -> Result<CumulativeMap, CarveError> {
    let (width, height) = (energy.width(), energy.height());
    if width < 1 || height < 1 {
        return Err(CarveError::InvalidDimensions { width, height });
    }

    let mut target = CumulativeMap::new(width, height);

    // The first row has no predecessors; it carries its native
    // energies.
    for x in 0..width {
        target[(x, 0)].energy = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            // Scan the two or three candidates in ascending column
            // order; strict `<` keeps the leftmost on ties.
            let first = cq!(x == 0, 0, x - 1);
            let last = cq!(x == maxwidth, maxwidth, x + 1);
            let mut parent = first;
            let mut lowest = target[(first, y - 1)].energy;
            for candidate in (first + 1)..=last {
                let e = target[(candidate, y - 1)].energy;
                if e < lowest {
                    lowest = e;
                    parent = candidate;
                }
            }
            target[(x, y)] = EnergyAndBackPointer {
                energy: energy[(x, y)] + lowest,
                parent,
            };
        }
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_an_empty_grid() {
        let energy = EnergyMap::new(0, 3);
        assert_eq!(
            accumulate(&energy).unwrap_err(),
            CarveError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn first_row_carries_its_native_energies() {
        let energy = EnergyMap::from_vec(3, 1, vec![4.0, 2.0, 7.0]);
        let costs = accumulate(&energy).unwrap();
        assert_eq!(costs[(0, 0)].energy, 4.0);
        assert_eq!(costs[(1, 0)].energy, 2.0);
        assert_eq!(costs[(2, 0)].energy, 7.0);
    }

    // The single-low-center scenario: a 3x3 grid of nines with a one
    // in the middle.  The center column accumulates 9, 10, 19; the
    // edge columns route through the cheap center from the second row
    // on, so the whole bottom row lands on 19.
    #[test]
    fn low_center_scenario_accumulates_through_the_middle() {
        #[rustfmt::skip]
        let energy = EnergyMap::from_vec(3, 3, vec![
            9.0, 9.0, 9.0,
            9.0, 1.0, 9.0,
            9.0, 9.0, 9.0,
        ]);
        let costs = accumulate(&energy).unwrap();
        assert_eq!(costs[(1, 1)].energy, 10.0);
        assert_eq!(costs[(0, 1)].energy, 18.0);
        assert_eq!(costs[(2, 1)].energy, 18.0);
        assert_eq!(costs[(0, 2)].energy, 19.0);
        assert_eq!(costs[(1, 2)].energy, 19.0);
        assert_eq!(costs[(2, 2)].energy, 19.0);
        // Every bottom cell reached 19 by stepping through the center.
        assert_eq!(costs[(0, 2)].parent, 1);
        assert_eq!(costs[(1, 2)].parent, 1);
        assert_eq!(costs[(2, 2)].parent, 1);
    }

    #[test]
    fn border_columns_only_see_in_bounds_predecessors() {
        // Column 0 of row 1 must pick from columns {0, 1} above, not
        // from a phantom column -1 worth 0.
        #[rustfmt::skip]
        let energy = EnergyMap::from_vec(2, 2, vec![
            5.0, 8.0,
            1.0, 1.0,
        ]);
        let costs = accumulate(&energy).unwrap();
        assert_eq!(costs[(0, 1)].energy, 6.0);
        assert_eq!(costs[(0, 1)].parent, 0);
        assert_eq!(costs[(1, 1)].energy, 6.0);
        assert_eq!(costs[(1, 1)].parent, 0);
    }

    #[test]
    fn ties_go_to_the_leftmost_predecessor() {
        let energy = EnergyMap::from_vec(3, 2, vec![2.0, 2.0, 2.0, 0.0, 0.0, 0.0]);
        let costs = accumulate(&energy).unwrap();
        assert_eq!(costs[(0, 1)].parent, 0);
        assert_eq!(costs[(1, 1)].parent, 0);
        assert_eq!(costs[(2, 1)].parent, 1);
    }
}
