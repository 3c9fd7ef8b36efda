//! Conversions between the RGB, HSL and HSV notations.
//!
//! RGB channels are in `[0, 255]`, every HSL and HSV component is in
//! `[0, 1]`. The functions are total: achromatic colors and black are handled
//! before any division can reach zero.
//!
//! ```rust
//! use hueblend::{Components, Srgb};
//! let hsl = Srgb::new(255.0, 0.0, 0.0).to_hsl();
//! assert_eq!(hsl.to_components(), Components(0.0, 1.0, 0.5));
//! ```

use crate::{
    color::{Component, Components},
    math::{lerp, split_floor, wrap_once},
    models::{Hsl, Hsv, Srgb},
};

const CHANNEL_MAX: Component = 255.0;

/// Convert an RGB color to the HSL notation.
pub fn rgb_to_hsl(red: Component, green: Component, blue: Component) -> Components {
    let (hue, min, max) = hue_with_min_max(&normalize(red, green, blue));

    let lightness = (max + min) / 2.0;
    let delta = max - min;

    let saturation = if delta == 0.0 {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Components(hue, saturation, lightness)
}

/// Convert an HSL color to RGB.
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Components {
    if saturation == 0.0 {
        return Components(lightness, lightness, lightness).map(|c| c * CHANNEL_MAX);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Components(
        hue_to_channel(p, q, hue + 1.0 / 3.0),
        hue_to_channel(p, q, hue),
        hue_to_channel(p, q, hue - 1.0 / 3.0),
    )
    .map(|c| c * CHANNEL_MAX)
}

/// Convert an RGB color to the HSV notation.
pub fn rgb_to_hsv(red: Component, green: Component, blue: Component) -> Components {
    let (hue, min, max) = hue_with_min_max(&normalize(red, green, blue));

    let delta = max - min;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Components(hue, saturation, max)
}

/// Convert an HSV color to RGB.
///
/// The hue is periodic: the sextant is chosen with a Euclidean remainder, so
/// hues below zero or at and above one select the same colors as their
/// equivalent inside `[0, 1)`.
pub fn hsv_to_rgb(hue: Component, saturation: Component, value: Component) -> Components {
    let (sextant, f) = split_floor(hue * 6.0);

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let rgb = match sextant.rem_euclid(6.0) as u8 {
        0 => Components(value, t, p),
        1 => Components(q, value, p),
        2 => Components(p, value, t),
        3 => Components(p, q, value),
        4 => Components(t, p, value),
        _ => Components(value, p, q),
    };

    rgb.map(|c| c * CHANNEL_MAX)
}

fn normalize(red: Component, green: Component, blue: Component) -> Components {
    Components(red, green, blue).map(|c| c / CHANNEL_MAX)
}

/// Calculate the hue in `[0, 1)` from normalized RGB components and return it
/// along with the min and max RGB values. Ties for the maximum resolve in
/// red, green, blue order.
fn hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        let sextant = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
        sextant / 6.0
    } else {
        0.0
    };

    (hue, min, max)
}

fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
    let t = wrap_once(t);

    if t < 1.0 / 6.0 {
        lerp(p, q, 6.0 * t)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        lerp(p, q, (2.0 / 3.0 - t) * 6.0)
    } else {
        p
    }
}

impl Srgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.red, self.green, self.blue).into()
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.red, self.green, self.blue).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB.
    pub fn to_srgb(&self) -> Srgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness).into()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to RGB.
    pub fn to_srgb(&self) -> Srgb {
        hsv_to_rgb(self.hue, self.saturation, self.value).into()
    }
}
