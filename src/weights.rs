//! The six blend weights and the channels they apply to.

use std::str::FromStr;

use bitflags::bitflags;

use crate::{Component, Components, Error};

/// One of the six independently weighted blend channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Raw red channel.
    Red,
    /// Raw green channel.
    Green,
    /// Raw blue channel.
    Blue,
    /// HSL hue.
    Hue,
    /// HSL saturation.
    Saturation,
    /// HSL lightness.
    Lightness,
}

impl Channel {
    /// Every channel, raw RGB channels first.
    pub const ALL: [Channel; 6] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Hue,
        Channel::Saturation,
        Channel::Lightness,
    ];

    /// The flag representing this channel in a [`Channels`] set.
    pub fn flag(self) -> Channels {
        match self {
            Channel::Red => Channels::RED,
            Channel::Green => Channels::GREEN,
            Channel::Blue => Channels::BLUE,
            Channel::Hue => Channels::HUE,
            Channel::Saturation => Channels::SATURATION,
            Channel::Lightness => Channels::LIGHTNESS,
        }
    }
}

impl FromStr for Channel {
    type Err = Error;

    /// Accepts the full lowercase name or its first letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Channel::Red,
            "g" | "green" => Channel::Green,
            "b" | "blue" => Channel::Blue,
            "h" | "hue" => Channel::Hue,
            "s" | "saturation" => Channel::Saturation,
            "l" | "lightness" => Channel::Lightness,
            _ => return Err(Error::UnknownChannel(s.to_string())),
        })
    }
}

bitflags! {
    /// A set of blend channels.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// Raw red channel.
        const RED = 1 << 0;
        /// Raw green channel.
        const GREEN = 1 << 1;
        /// Raw blue channel.
        const BLUE = 1 << 2;
        /// HSL hue.
        const HUE = 1 << 3;
        /// HSL saturation.
        const SATURATION = 1 << 4;
        /// HSL lightness.
        const LIGHTNESS = 1 << 5;
        /// The raw RGB channels.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// The HSL channels.
        const HSL = Self::HUE.bits() | Self::SATURATION.bits() | Self::LIGHTNESS.bits();
    }
}

/// Blend strength for each channel. Weights are unbounded and may be
/// negative; a weight of one moves that channel all the way from the right
/// patch to the left patch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeightVector {
    /// Weight of the raw red difference.
    pub red: Component,
    /// Weight of the raw green difference.
    pub green: Component,
    /// Weight of the raw blue difference.
    pub blue: Component,
    /// Weight of the hue difference.
    pub hue: Component,
    /// Weight of the saturation difference.
    pub saturation: Component,
    /// Weight of the lightness difference.
    pub lightness: Component,
}

impl WeightVector {
    /// All weights zero, blending yields the right patch.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Full raw RGB weights, blending yields the left patch.
    pub const RGB: Self = Self::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.0);

    /// Full HSL weights.
    pub const HSL: Self = Self::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

    /// Create a weight vector from its six weights.
    pub const fn new(
        red: Component,
        green: Component,
        blue: Component,
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            hue,
            saturation,
            lightness,
        }
    }

    /// Return the weight of a single channel.
    pub fn get(&self, channel: Channel) -> Component {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
        }
    }

    /// Return a copy with the weight of one channel replaced.
    pub fn with(mut self, channel: Channel, weight: Component) -> Self {
        let slot = match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Hue => &mut self.hue,
            Channel::Saturation => &mut self.saturation,
            Channel::Lightness => &mut self.lightness,
        };
        *slot = weight;
        self
    }

    /// The raw red, green and blue weights.
    pub fn rgb(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }

    /// The hue, saturation and lightness weights.
    pub fn hsl(&self) -> Components {
        Components(self.hue, self.saturation, self.lightness)
    }

    /// The channels with a non-zero weight.
    pub fn active(&self) -> Channels {
        Channel::ALL
            .into_iter()
            .filter(|&channel| self.get(channel) != 0.0)
            .fold(Channels::empty(), |set, channel| set | channel.flag())
    }
}
