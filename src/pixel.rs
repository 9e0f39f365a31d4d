//! Typed pixel records and pixel-format naming.

use std::fmt;

use image::{ColorType, Primitive, Rgba};

/// A single RGBA pixel with named channels.
///
/// `T` is the channel sample type: `u8`, `u16` or `f32`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel<T = u8> {
    /// Red intensity.
    pub r: T,
    /// Green intensity.
    pub g: T,
    /// Blue intensity.
    pub b: T,
    /// Opacity; the channel type's maximum is fully opaque.
    pub a: T,
}

impl<T: Primitive> Pixel<T> {
    /// Build a pixel from its four channels.
    #[must_use]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the alpha channel is at the maximum value for `T`.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a >= T::DEFAULT_MAX_VALUE
    }
}

impl<T: Primitive> From<Rgba<T>> for Pixel<T> {
    fn from(Rgba([r, g, b, a]): Rgba<T>) -> Self {
        Self { r, g, b, a }
    }
}

/// Short name of a decoded image's pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    /// 8-bit luminance.
    L,
    /// 8-bit luminance with alpha.
    La,
    /// 8-bit RGB.
    Rgb,
    /// 8-bit RGBA.
    Rgba,
    /// 16-bit luminance.
    L16,
    /// 16-bit luminance with alpha.
    La16,
    /// 16-bit RGB.
    Rgb16,
    /// 16-bit RGBA.
    Rgba16,
    /// 32-bit float RGB.
    Rgb32F,
    /// 32-bit float RGBA.
    Rgba32F,
    /// A format not known to this crate.
    Unknown,
}

impl PixelMode {
    /// Whether pixels in this mode carry their own alpha sample.
    ///
    /// `Unknown` reports `false` so that such images always get the
    /// conversion note.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::La | Self::Rgba | Self::La16 | Self::Rgba16 | Self::Rgba32F)
    }

    /// The mode's display name, e.g. `"RGB"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::La => "LA",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::L16 => "L16",
            Self::La16 => "LA16",
            Self::Rgb16 => "RGB16",
            Self::Rgba16 => "RGBA16",
            Self::Rgb32F => "RGB32F",
            Self::Rgba32F => "RGBA32F",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<ColorType> for PixelMode {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 => Self::L,
            ColorType::La8 => Self::La,
            ColorType::Rgb8 => Self::Rgb,
            ColorType::Rgba8 => Self::Rgba,
            ColorType::L16 => Self::L16,
            ColorType::La16 => Self::La16,
            ColorType::Rgb16 => Self::Rgb16,
            ColorType::Rgba16 => Self::Rgba16,
            ColorType::Rgb32F => Self::Rgb32F,
            ColorType::Rgba32F => Self::Rgba32F,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
