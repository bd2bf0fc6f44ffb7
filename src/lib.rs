//! richmenu renders the static menu images of a messaging-platform
//! integration: fixed-size PNGs with a gradient background, a 3x2 grid of
//! bordered buttons, and bilingual (CJK + Latin) labels, one per color
//! scheme.
//!
//! # Pipeline overview
//!
//! 1. **Gradient**: fill a 2500x1686 canvas with a vertical two-color ramp
//! 2. **Locate fonts**: ordered first-match-wins scan over host font paths
//! 3. **Compose**: button outlines and Parley-shaped glyph runs via
//!    `vello_cpu`, over the gradient
//! 4. **Encode**: maximum-compression PNG, `richmenu_<scheme>.png`
//!
//! The whole run is single-threaded and deterministic: the same config and
//! fonts produce byte-identical files. A missing CJK font is fatal before
//! any image is produced; a per-scheme encode/write failure only skips that
//! scheme.
#![forbid(unsafe_code)]

pub mod color;
pub mod compose;
pub mod encode;
pub mod error;
pub mod fonts;
pub mod gradient;
pub mod model;
pub mod pipeline;
pub mod text;

pub use color::Rgb8;
pub use compose::{MenuCompositor, MenuImage};
pub use encode::write_png;
pub use error::{MenuError, MenuResult};
pub use fonts::{CJK_FONT_CANDIDATES, FONT_INSTALL_HINT, FontLocator, FontSet, LATIN_FONT_PATH};
pub use model::{ButtonSpec, CanvasSize, ColorScheme, MenuConfig};
pub use pipeline::{ProducedAsset, RunSummary, generate_menus};
pub use text::{TextBrush, TextExtent, TextLayoutEngine};
