//! Core transparency check: decode, widen to RGBA when needed, scan.

use std::fmt;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::Result;
use crate::pixel::PixelMode;
use crate::scan::{self, ScanResult};

/// Final classification of a scanned image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// At least one pixel has alpha below full opacity.
    Transparent {
        /// Number of non-opaque pixels.
        transparent: u64,
        /// Number of pixels scanned.
        total: u64,
    },
    /// Every pixel is fully opaque.
    Opaque,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent { transparent, total } => {
                write!(f, "result: TRANSPARENT ({transparent}/{total} pixels)")
            }
            Self::Opaque => f.write_str("result: OPAQUE (No transparent pixels found)"),
        }
    }
}

/// Everything learned from checking one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Pixel format of the decoded image, before any conversion.
    pub source_mode: PixelMode,
    /// Whether the image had no alpha channel and was converted to RGBA.
    pub converted: bool,
    /// Tally from the alpha scan.
    pub scan: ScanResult,
}

impl Outcome {
    /// Classify the scan result.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.scan.has_transparency() {
            Verdict::Transparent {
                transparent: self.scan.transparent,
                total: self.scan.total,
            }
        } else {
            Verdict::Opaque
        }
    }

    /// Informational line printed when the image had to be given an alpha channel.
    #[must_use]
    pub fn conversion_note(&self) -> Option<String> {
        self.converted.then(|| {
            format!(
                "Image mode is {}, convert to RGBA to check transparency.",
                self.source_mode
            )
        })
    }
}

/// Decode the image at `path` and scan its alpha channel.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. The file is closed before scanning starts.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or read,
/// and [`Error::Decode`](crate::Error::Decode) if the data is not a supported image.
pub fn check(path: impl AsRef<Path>) -> Result<Outcome> {
    let path = path.as_ref();
    log::debug!("decoding {}", path.display());

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    log::debug!("detected format: {:?}", reader.format());
    let image = reader.decode()?;

    Ok(check_image(&image))
}

/// Scan an already decoded image.
///
/// Images without an alpha channel are converted to RGBA (and flagged as
/// converted). Alpha is compared at the image's native depth: 16-bit and
/// float images are not narrowed to 8 bits first.
#[must_use]
pub fn check_image(image: &DynamicImage) -> Outcome {
    let source_mode = PixelMode::from(image.color());
    let converted = !source_mode.has_alpha();
    log::debug!(
        "{}x{} image in mode {source_mode}{}",
        image.width(),
        image.height(),
        if converted { ", converting to RGBA" } else { "" }
    );

    let scan = match image {
        DynamicImage::ImageRgba8(buf) => scan::scan_rgba(buf),
        DynamicImage::ImageRgba16(buf) => scan::scan_rgba(buf),
        DynamicImage::ImageRgba32F(buf) => scan::scan_rgba(buf),
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_) => scan::scan_rgba(&image.to_rgba16()),
        DynamicImage::ImageRgb32F(_) => scan::scan_rgba(&image.to_rgba32f()),
        _ => scan::scan_rgba(&image.to_rgba8()),
    };

    Outcome {
        source_mode,
        converted,
        scan,
    }
}
