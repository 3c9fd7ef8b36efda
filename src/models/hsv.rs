//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;

hueblend_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space. All
    /// components are in `[0, 1]`, the hue wraps.
    pub struct Hsv {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value component of the color.
        value: Component,
    }
}
