//! A [`Patch`] is a fixed-size, row-major grid of RGB colors cut from a
//! larger image.

use crate::{Error, Result, Srgb};

/// Dimensions of a patch or image, in pixels.
pub type Size = euclid::default::Size2D<u32>;

/// A pixel position, measured from the top-left corner.
pub type Point = euclid::default::Point2D<u32>;

/// Bytes per pixel in an RGBA8 buffer.
const RGBA: usize = 4;

/// A rectangular grid of colors stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    size: Size,
    pixels: Vec<Srgb>,
}

fn area(size: Size) -> usize {
    size.width as usize * size.height as usize
}

impl Patch {
    /// Create a patch from row-major pixels. The number of pixels must match
    /// the dimensions.
    pub fn new(size: Size, pixels: Vec<Srgb>) -> Result<Self> {
        let expected = area(size);
        if pixels.len() != expected {
            return Err(Error::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { size, pixels })
    }

    /// Create a patch by calling `f` with the `x` and `y` of every pixel.
    pub fn from_fn(size: Size, mut f: impl FnMut(u32, u32) -> Srgb) -> Self {
        let pixels = (0..size.height)
            .flat_map(|y| (0..size.width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self { size, pixels }
    }

    /// Create a patch with every pixel set to `color`.
    pub fn filled(size: Size, color: Srgb) -> Self {
        Self {
            size,
            pixels: vec![color; area(size)],
        }
    }

    /// Create a patch from an RGBA8 buffer of exactly the patch dimensions.
    /// Alpha is ignored.
    pub fn from_rgba8(size: Size, bytes: &[u8]) -> Result<Self> {
        Self::from_rgba8_region(size, bytes, Point::origin(), size)
    }

    /// Cut a patch of `size` at `origin` out of an RGBA8 image with the given
    /// `bounds`. Alpha is ignored.
    pub fn from_rgba8_region(
        bounds: Size,
        bytes: &[u8],
        origin: Point,
        size: Size,
    ) -> Result<Self> {
        let expected = area(bounds) * RGBA;
        if bytes.len() != expected {
            return Err(Error::ByteCount {
                expected,
                actual: bytes.len(),
            });
        }

        let fits = |start: u32, len: u32, limit: u32| {
            start.checked_add(len).is_some_and(|end| end <= limit)
        };
        if !fits(origin.x, size.width, bounds.width) || !fits(origin.y, size.height, bounds.height)
        {
            tracing::trace!(?origin, ?size, ?bounds, "patch region out of bounds");
            return Err(Error::RegionOutOfBounds {
                origin,
                size,
                bounds,
            });
        }

        let stride = bounds.width as usize * RGBA;
        let pixels = (0..size.height as usize)
            .flat_map(move |y| {
                let start = (origin.y as usize + y) * stride + origin.x as usize * RGBA;
                bytes[start..start + size.width as usize * RGBA].chunks_exact(RGBA)
            })
            .map(|px| Srgb::from_u8(px[0], px[1], px[2]))
            .collect();

        Ok(Self { size, pixels })
    }

    /// Encode the patch as RGBA8 for display. Channels are clamped to
    /// `[0, 255]` and rounded, alpha is opaque.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| {
                let [r, g, b] = pixel.to_u8_clamped();
                [r, g, b, u8::MAX]
            })
            .collect()
    }

    /// Dimensions of the patch.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width of the patch in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height of the patch in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// The color at `x`, `y`, if it lies inside the patch.
    pub fn get(&self, x: u32, y: u32) -> Option<&Srgb> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Srgb] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Srgb] {
        &mut self.pixels
    }
}
