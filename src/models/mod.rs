//! Models are structs that represent a color in one of the supported
//! notations. Conversions between them live in [`crate::convert`].

mod hsl;
mod hsv;
mod rgb;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Srgb;
