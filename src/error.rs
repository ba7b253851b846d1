use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Configuration errors raised while building a [`DigitPanel`](crate::DigitPanel).
///
/// Rendering itself never fails: unsupported characters are dropped and text is
/// padded or truncated to fit the panel.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The panel must have at least one row.
    #[display("rows must be positive, got {rows}")]
    NonPositiveRows {
        /// Requested row count.
        rows: i32,
    },

    /// The panel must have at least one column.
    #[display("cols must be positive, got {cols}")]
    NonPositiveCols {
        /// Requested column count.
        cols: i32,
    },

    /// `rows * cols` does not equal the panel's light count.
    #[display("{rows}x{cols} panel does not have {len} lights")]
    LightCountMismatch {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        cols: i32,
        /// Light count the panel was declared with.
        len: usize,
    },

    /// The serpentine wiring walk did not produce one entry per column.
    #[display("first-light table has {actual} entries, expected {expected}")]
    FirstLightTable {
        /// Column count.
        expected: usize,
        /// Entries produced.
        actual: usize,
    },
}
