//! Content-aware image narrowing by seam carving.
//!
//! Every iteration scores each pixel with the magnitude of its Sobel
//! gradient, accumulates those scores into a minimum-path-cost table,
//! traces the cheapest top-to-bottom seam through the table, and
//! removes it.  Repeat until the image is as narrow as requested.

pub mod ternary;

pub mod buffer;
pub use buffer::PixelBuffer;

pub mod errors;
pub use errors::CarveError;

pub mod grid;
pub use grid::{CumulativeMap, EnergyMap, Grid};

pub mod grayscale;
pub use grayscale::luminance_map;

pub mod energy;
pub use energy::{energy_to_buffer, sobel_energy};

pub mod cumulative;
pub use cumulative::accumulate;

pub mod seam;
pub use seam::{remove_seam, trace_seam, Seam};

pub mod carver;
pub use carver::{seamcarve, SeamCarver};

pub mod io;
pub use io::{ImageFileSink, ImageFileSource, PixelSink, PixelSource};
