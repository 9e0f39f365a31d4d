//! Report whether an image contains any non-opaque pixels.
//!
//! The image is decoded with the [`image`] crate. Formats without an alpha
//! channel are converted to RGBA first. Every pixel is then checked, and the
//! crate counts the pixels whose alpha is below full opacity.
//!
//! # Quick Start
//!
//! ```no_run
//! use alpha_check::{check, Verdict};
//!
//! let outcome = check("logo.png").expect("failed to decode");
//! match outcome.verdict() {
//!     Verdict::Transparent { transparent, total } => {
//!         println!("{transparent} of {total} pixels are see-through");
//!     }
//!     Verdict::Opaque => println!("fully opaque"),
//! }
//! ```
//!
//! # Report lines
//!
//! [`report::write_report`] produces the same text as the `alpha-check`
//! binary: an optional conversion note, then a `result: ...` line, or a
//! single `Error: ...` line when decoding fails.

#![deny(missing_docs)]

mod checker;
pub mod error;
pub mod pixel;
pub mod report;
pub mod scan;

pub use checker::{check, check_image, Outcome, Verdict};
pub use error::{Error, Result};
pub use pixel::{Pixel, PixelMode};
pub use scan::ScanResult;
