//! Render digit strings onto LED matrix panels wired as a column serpentine.
//!
//! Most users only need [`DigitPanel`]: build it once for the panel's
//! geometry, then call [`DigitPanel::render`] to get the on/off state of every
//! light in the order the strip is wired.
//!
//! # Glossary
//!
//! - **Serpentine panel:** one LED strip folded through the columns, running
//!   down the first column, up the second, and so on.
//! - **Bit canvas ([`BitCanvas`]):** the text's bits in logical order, column
//!   after column, top to bottom.
//! - **Light frame ([`LightFrame`]):** the same bits in physical wiring order.
//! - **First-light table ([`layout::FirstLightTable`]):** the strip index
//!   where each column is addressed from.
//!
//! # Features
//!
//! - `host` (default): `std`, console preview, and [`to_png`] previews.
//! - `defmt`: logging through `defmt` and `defmt::Format` on public types.
//!
//! Without `host` the crate is `no_std` and does not allocate.
#![cfg_attr(not(any(test, feature = "host")), no_std)]

mod digit_panel;
mod error;
pub mod font;
pub mod frame;
pub mod layout;
#[cfg(feature = "host")]
pub mod to_png;

pub use crate::digit_panel::{DARK_MARKER, DigitPanel, LIT_MARKER};
// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
pub use crate::frame::{BitCanvas, LightFrame};
