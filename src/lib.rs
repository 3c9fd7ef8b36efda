//! hueblend converts colors between the RGB, HSL and HSV notations and uses
//! those conversions to blend two image patches into a third, with an
//! independent weight for each of the red, green, blue, hue, saturation and
//! lightness channels.
//!
//! ```rust
//! use hueblend::{blend, Channel, Patch, Size, Srgb, WeightVector};
//!
//! let size = Size::new(2, 2);
//! let left = Patch::filled(size, Srgb::new(200.0, 100.0, 50.0));
//! let right = Patch::filled(size, Srgb::new(50.0, 100.0, 200.0));
//!
//! let weights = WeightVector::default().with(Channel::Red, 1.0);
//! let output = blend(&left, &right, &weights).unwrap();
//! assert!((output.pixels()[0].red - 200.0).abs() < 0.01);
//! ```

#![deny(missing_docs)]

mod blend;
mod color;
pub mod convert;
mod error;
mod math;
mod models;
mod patch;
mod weights;

#[cfg(test)]
mod test;

pub use blend::{blend, blend_into, blend_pixel};
pub use color::{Component, Components};
pub use error::{Error, Result};
pub use models::{Hsl, Hsv, Srgb};
pub use patch::{Patch, Point, Size};
pub use weights::{Channel, Channels, WeightVector};
