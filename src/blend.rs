//! Blend two equally sized patches channel by channel.
//!
//! Every output pixel is the right pixel moved towards the left pixel along
//! two paths at once:
//!
//! 1. the raw RGB difference, scaled by the red, green and blue weights;
//! 2. the HSL difference, scaled by the hue, saturation and lightness
//!    weights, added onto the right pixel's HSL value and converted back to
//!    RGB. Only the change this causes relative to the right pixel is kept.
//!
//! Both contributions are summed and the result is not clamped.

use tracing::{debug, trace};

use crate::{Error, Hsl, Patch, Result, Srgb, WeightVector};

/// Blend a single pair of pixels.
pub fn blend_pixel(left: &Srgb, right: &Srgb, weights: &WeightVector) -> Srgb {
    let left_rgb = left.to_components();
    let right_rgb = right.to_components();
    let left_hsl = left.to_hsl().to_components();
    let right_hsl = right.to_hsl().to_components();

    let rgb_diff = (left_rgb - right_rgb) * weights.rgb();
    let hsl_diff = (left_hsl - right_hsl) * weights.hsl();

    let resynthesized = Hsl::from(right_hsl + hsl_diff).to_srgb().to_components();
    let resynthesis_delta = resynthesized - right_rgb;

    Srgb::from(right_rgb + rgb_diff + resynthesis_delta)
}

/// Blend `left` into `right` and return the result as a new patch.
pub fn blend(left: &Patch, right: &Patch, weights: &WeightVector) -> Result<Patch> {
    check_size(left, right)?;

    let mut output = Patch::filled(right.size(), Srgb::BLACK);
    blend_pixels(left, right, weights, &mut output);
    Ok(output)
}

/// Blend `left` into `right`, overwriting every pixel of `output`. All three
/// patches must share their dimensions.
pub fn blend_into(
    left: &Patch,
    right: &Patch,
    weights: &WeightVector,
    output: &mut Patch,
) -> Result<()> {
    check_size(left, right)?;
    check_size(right, output)?;

    blend_pixels(left, right, weights, output);
    Ok(())
}

fn check_size(a: &Patch, b: &Patch) -> Result<()> {
    if a.size() != b.size() {
        trace!(left = ?a.size(), right = ?b.size(), "rejecting blend");
        return Err(Error::DimensionMismatch {
            left: a.size(),
            right: b.size(),
        });
    }
    Ok(())
}

fn blend_pixels(left: &Patch, right: &Patch, weights: &WeightVector, output: &mut Patch) {
    debug!(
        width = right.width(),
        height = right.height(),
        active = ?weights.active(),
        "blending patches"
    );

    #[cfg(not(feature = "rayon"))]
    output
        .pixels_mut()
        .iter_mut()
        .zip(left.pixels().iter().zip(right.pixels()))
        .for_each(|(out, (l, r))| *out = blend_pixel(l, r, weights));

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;

        output
            .pixels_mut()
            .par_iter_mut()
            .zip(left.pixels().par_iter().zip(right.pixels().par_iter()))
            .for_each(|(out, (l, r))| *out = blend_pixel(l, r, weights));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_channel_eq, Channel, Size};

    fn assert_patch_eq(actual: &Patch, expected: &Patch) {
        assert_eq!(actual.size(), expected.size());
        for (a, e) in actual.pixels().iter().zip(expected.pixels()) {
            assert_channel_eq!(a.red, e.red);
            assert_channel_eq!(a.green, e.green);
            assert_channel_eq!(a.blue, e.blue);
        }
    }

    fn gradient(size: Size, seed: u32) -> Patch {
        Patch::from_fn(size, |x, y| {
            Srgb::from_u8(
                ((x * 37 + seed) % 256) as u8,
                ((y * 53 + seed * 3) % 256) as u8,
                ((x * y + seed * 7) % 256) as u8,
            )
        })
    }

    #[test]
    fn zero_weights_return_the_right_patch() {
        let size = Size::new(16, 9);
        let left = gradient(size, 1);
        let right = gradient(size, 90);
        let output = blend(&left, &right, &WeightVector::ZERO).unwrap();
        assert_patch_eq(&output, &right);
    }

    #[test]
    fn full_rgb_weights_return_the_left_patch() {
        let size = Size::new(16, 9);
        let left = gradient(size, 1);
        let right = gradient(size, 90);
        let output = blend(&left, &right, &WeightVector::RGB).unwrap();
        assert_patch_eq(&output, &left);
    }

    #[test]
    fn identical_patches_are_unchanged() {
        let size = Size::new(8, 8);
        let patch = gradient(size, 17);
        for weights in [
            WeightVector::RGB,
            WeightVector::HSL,
            WeightVector::new(-1.0, 0.5, 2.0, 0.3, -0.7, 1.0),
        ] {
            let output = blend(&patch, &patch, &weights).unwrap();
            assert_patch_eq(&output, &patch);
        }
    }

    #[test]
    fn red_weight_only_moves_red() {
        let left = Srgb::new(200.0, 100.0, 50.0);
        let right = Srgb::new(50.0, 100.0, 200.0);
        let weights = WeightVector::ZERO.with(Channel::Red, 1.0);

        let out = blend_pixel(&left, &right, &weights);
        assert_channel_eq!(out.red, 200.0);
        assert_channel_eq!(out.green, 100.0);
        assert_channel_eq!(out.blue, 200.0);
    }

    #[test]
    fn partial_rgb_weights_interpolate() {
        let left = Srgb::new(200.0, 100.0, 50.0);
        let right = Srgb::new(50.0, 100.0, 200.0);
        let weights = WeightVector::new(0.5, 1.0, -0.5, 0.0, 0.0, 0.0);

        let out = blend_pixel(&left, &right, &weights);
        assert_channel_eq!(out.red, 125.0);
        assert_channel_eq!(out.green, 100.0);
        assert_channel_eq!(out.blue, 275.0);
    }

    #[test]
    fn full_hue_weight_takes_the_left_hue() {
        // Same saturation and lightness, opposite hues.
        let left = Srgb::new(200.0, 100.0, 50.0);
        let right = Srgb::new(50.0, 100.0, 200.0);
        let weights = WeightVector::ZERO.with(Channel::Hue, 1.0);

        let out = blend_pixel(&left, &right, &weights);
        assert_channel_eq!(out.red, 200.0);
        assert_channel_eq!(out.green, 100.0);
        assert_channel_eq!(out.blue, 50.0);
    }

    #[test]
    fn lightness_weight_follows_the_hsl_path() {
        let left = Srgb::new(255.0, 255.0, 255.0);
        let right = Srgb::new(0.0, 0.0, 0.0);
        let weights = WeightVector::ZERO.with(Channel::Lightness, 0.5);

        // Black to white at half lightness lands on mid gray.
        let out = blend_pixel(&left, &right, &weights);
        assert_channel_eq!(out.red, 127.5);
        assert_channel_eq!(out.green, 127.5);
        assert_channel_eq!(out.blue, 127.5);
    }

    #[test]
    fn rgb_and_hsl_contributions_add_up_unclamped() {
        let left = Srgb::new(255.0, 255.0, 255.0);
        let right = Srgb::new(0.0, 0.0, 0.0);
        let weights = WeightVector::new(1.0, 1.0, 1.0, 0.0, 0.0, 1.0);

        let out = blend_pixel(&left, &right, &weights);
        assert_channel_eq!(out.red, 510.0);
        assert_channel_eq!(out.green, 510.0);
        assert_channel_eq!(out.blue, 510.0);

        let out = blend_pixel(&right, &left, &weights);
        assert_channel_eq!(out.red, -255.0);
        assert_channel_eq!(out.green, -255.0);
        assert_channel_eq!(out.blue, -255.0);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let left = Patch::filled(Size::new(4, 4), Srgb::BLACK);
        let right = Patch::filled(Size::new(4, 5), Srgb::BLACK);
        assert_eq!(
            blend(&left, &right, &WeightVector::RGB),
            Err(Error::DimensionMismatch {
                left: Size::new(4, 4),
                right: Size::new(4, 5),
            })
        );
    }

    #[test]
    fn blend_into_reuses_the_output() {
        let size = Size::new(5, 5);
        let left = gradient(size, 3);
        let right = gradient(size, 200);
        let mut output = Patch::filled(size, Srgb::new(1.0, 2.0, 3.0));

        blend_into(&left, &right, &WeightVector::RGB, &mut output).unwrap();
        assert_patch_eq(&output, &left);

        blend_into(&left, &right, &WeightVector::ZERO, &mut output).unwrap();
        assert_patch_eq(&output, &right);

        let mut wrong = Patch::filled(Size::new(5, 4), Srgb::BLACK);
        assert!(matches!(
            blend_into(&left, &right, &WeightVector::ZERO, &mut wrong),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(wrong.pixels().iter().all(|p| *p == Srgb::BLACK));
    }

    #[test]
    fn blend_matches_blend_pixel() {
        let size = Size::new(7, 3);
        let left = gradient(size, 11);
        let right = gradient(size, 123);
        let weights = WeightVector::new(0.2, -0.4, 0.6, 0.8, -1.0, 0.1);

        let output = blend(&left, &right, &weights).unwrap();
        for y in 0..size.height {
            for x in 0..size.width {
                let (Some(l), Some(r), Some(o)) = (left.get(x, y), right.get(x, y), output.get(x, y))
                else {
                    panic!("pixel {x},{y} missing");
                };
                assert_eq!(*o, blend_pixel(l, r, &weights));
            }
        }
    }
}
