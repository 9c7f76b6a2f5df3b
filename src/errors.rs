// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving error taxonomy.
//!
//! All of these are configuration or programmer errors, detected
//! before any pixel is moved; none of them is transient, so there is
//! no retry machinery anywhere in the crate.

use failure::Fail;

/// Everything that can go wrong while carving.  Each variant is
/// raised before the current iteration mutates anything, so a failed
/// carve always leaves the input buffer exactly as it was.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The image has no pixels in at least one direction.
    #[fail(display = "invalid image dimensions {}x{}", width, height)]
    InvalidDimensions { width: u32, height: u32 },

    /// The raw byte vector does not match width * height * 4.
    #[fail(
        display = "malformed pixel buffer: {} bytes for a {}x{} RGBA image",
        len, width, height
    )]
    MalformedBuffer { len: usize, width: u32, height: u32 },

    /// More seams requested than there are columns to remove.
    #[fail(
        display = "cannot remove {} seams from an image only {} columns wide",
        requested, width
    )]
    WidthExhausted { requested: u32, width: u32 },
}
