//! Error types for patch construction and blending.

use thiserror::Error;

use crate::patch::{Point, Size};

/// Errors reported before any pixel is processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two patches that must share their dimensions do not.
    #[error("patch dimensions differ: {left:?} and {right:?}")]
    DimensionMismatch {
        /// Dimensions of the first patch.
        left: Size,
        /// Dimensions of the second patch.
        right: Size,
    },

    /// A pixel buffer does not hold exactly `width * height` colors.
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    PixelCount {
        /// Number of pixels the dimensions call for.
        expected: usize,
        /// Number of pixels supplied.
        actual: usize,
    },

    /// An RGBA byte buffer does not match its dimensions.
    #[error("byte buffer holds {actual} bytes, expected {expected}")]
    ByteCount {
        /// Number of bytes the dimensions call for.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// A patch region reaches past the edge of the source image.
    #[error("region of {size:?} at {origin:?} does not fit in a {bounds:?} image")]
    RegionOutOfBounds {
        /// Top-left corner of the region.
        origin: Point,
        /// Dimensions of the region.
        size: Size,
        /// Dimensions of the source image.
        bounds: Size,
    },

    /// A channel name that is not one of the six blend channels.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
