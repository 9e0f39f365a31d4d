//! Alpha scan over decoded pixel data.
//!
//! The scan is a commutative reduction: every pixel contributes one to the
//! total, and one to the transparent tally when its alpha is below the
//! channel maximum. Pixel order has no effect on the result.

use std::ops::Deref;

use image::{ImageBuffer, Primitive, Rgba};

use crate::pixel::Pixel;

/// Tally of a completed alpha scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Pixels whose alpha is below full opacity.
    pub transparent: u64,
    /// Pixels inspected.
    pub total: u64,
}

impl ScanResult {
    /// Whether at least one non-opaque pixel was found.
    #[must_use]
    pub const fn has_transparency(&self) -> bool {
        self.transparent > 0
    }
}

/// Count non-opaque pixels in any sequence of typed pixels.
#[must_use]
pub fn scan_pixels<T, I>(pixels: I) -> ScanResult
where
    T: Primitive,
    I: IntoIterator<Item = Pixel<T>>,
{
    pixels
        .into_iter()
        .fold(ScanResult::default(), |mut acc, px| {
            acc.total += 1;
            if !px.is_opaque() {
                acc.transparent += 1;
            }
            acc
        })
}

/// Count non-opaque pixels of an RGBA buffer in row-major order.
#[must_use]
pub fn scan_rgba<T, C>(image: &ImageBuffer<Rgba<T>, C>) -> ScanResult
where
    T: Primitive,
    Rgba<T>: image::Pixel<Subpixel = T>,
    C: Deref<Target = [T]>,
{
    let result = scan_pixels(image.pixels().map(|px| Pixel::<T>::from(*px)));
    log::trace!(
        "scanned {}x{} buffer: {}/{} non-opaque",
        image.width(),
        image.height(),
        result.transparent,
        result.total
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn empty_sequence_is_opaque() {
        let result = scan_pixels(std::iter::empty::<Pixel>());
        assert_eq!(result, ScanResult::default());
        assert!(!result.has_transparency());
    }

    #[test]
    fn counts_pixels_below_max_alpha() {
        let pixels = [
            Pixel::new(255u8, 0, 0, 255),
            Pixel::new(0, 255, 0, 128),
            Pixel::new(0, 0, 255, 255),
            Pixel::new(255, 255, 255, 0),
        ];
        let result = scan_pixels(pixels);
        assert_eq!(result, ScanResult { transparent: 2, total: 4 });
        assert!(result.has_transparency());
    }

    #[test]
    fn order_does_not_matter() {
        let forward = [
            Pixel::new(0u8, 0, 0, 1),
            Pixel::new(0, 0, 0, 255),
            Pixel::new(0, 0, 0, 254),
        ];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(scan_pixels(forward), scan_pixels(reversed));
    }

    #[test]
    fn scan_rgba_covers_every_pixel() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([9, 9, 9, 255]));
        img.put_pixel(2, 1, Rgba([9, 9, 9, 200]));
        assert_eq!(scan_rgba(&img), ScanResult { transparent: 1, total: 6 });
    }

    #[test]
    fn scan_rgba_at_sixteen_bits() {
        let mut img: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(2, 2, Rgba([0, 0, 0, u16::MAX]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 65534]));
        assert_eq!(scan_rgba(&img), ScanResult { transparent: 1, total: 4 });
    }
}
