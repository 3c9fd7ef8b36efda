//! Model a color in the sRGB color space with 8-bit nominal channels.

use crate::color::Component;

hueblend_macros::gen_model! {
    /// A color in the sRGB color space. Each channel is nominally in
    /// `[0, 255]` but is stored as a float and never clamped.
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Srgb {
    /// Black, `rgb(0, 0, 0)`.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// Create a color from 8-bit channels.
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }

    /// Clamp each channel into `[0, 255]` and round it to the nearest byte.
    pub fn to_u8_clamped(&self) -> [u8; 3] {
        let c = self
            .to_components()
            .map(|v| v.clamp(0.0, 255.0).round());
        [c.0 as u8, c.1 as u8, c.2 as u8]
    }
}
