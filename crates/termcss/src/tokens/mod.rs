//! Design tokens the stylesheet is expanded from.
//!
//! This module provides:
//!
//! - [`Tokens`]: The registry of palette, grid, scales and border settings
//! - [`PaletteEntry`]: A named color
//! - [`Grid`], [`GridUnit`]: The character/line grid every length is measured in
//! - [`Side`], [`Axis`], [`Corner`]: Ordered taxonomies used by the expanders
//! - [`TokenError`]: Errors from registry validation
//!
//! Every collection here is an ordered list. Expanders iterate them as given,
//! so the same registry always produces byte-identical output.

mod error;
mod palette;
mod registry;
mod taxonomy;

pub use error::TokenError;
pub use palette::{PaletteEntry, DEFAULT_PALETTE};
pub use registry::{BorderTokens, Grid, RadiusPreset, Tokens};
pub use taxonomy::{Axis, Corner, GridUnit, Side};
