//! A digit renderer for serpentine-wired LED matrix panels.
//!
//! See [`DigitPanel`] for the rendering pipeline and an example.

use core::fmt::{self, Write};
use core::slice::Chunks;

use crate::Result;
use crate::font;
use crate::frame::{BitCanvas, LightFrame};
use crate::layout::{FirstLightTable, build_first_light_table};

/// Marker written for a lit light in the text preview.
pub const LIT_MARKER: char = '1';
/// Marker written for a dark light in the text preview.
pub const DARK_MARKER: char = ' ';

/// Renders digit strings for a panel of `N` lights wired as a column serpentine.
///
/// Rendering runs in three steps:
/// 1. [`encode`](Self::encode) the text with the built-in column font into `N`
///    logical bits.
/// 2. Split the bits into columns of `rows` lights ([`column_groups`](Self::column_groups)).
/// 3. Reverse every odd column, because the strip runs bottom-up there, and
///    join the columns back together ([`arrange`](Self::arrange)).
///
/// The panel is immutable once built, so one `DigitPanel` can serve any
/// number of threads.
///
/// # Example
///
/// ```rust
/// use digit_panel::DigitPanel;
///
/// let panel = DigitPanel::<392>::new(8, 49)?;
/// let frame = panel.render("0 1 2 3 4 5 6 7 8 9", false);
///
/// assert_eq!(frame.len(), 392);
/// // The top-left light of the "0" is lit.
/// assert!(frame[panel.first_light_table().light_index(0, 0)]);
/// # Ok::<(), digit_panel::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitPanel<const N: usize> {
    rows: usize,
    cols: usize,
    first_light_table: FirstLightTable<N>,
}

impl<const N: usize> DigitPanel<N> {
    /// Create a panel with `rows`×`cols` lights.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `rows` or `cols` is not positive, or if
    /// `rows * cols` does not equal `N`.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        let first_light_table = build_first_light_table::<N>(rows, cols)?;
        let panel = Self {
            rows: first_light_table.rows(),
            cols: first_light_table.len(),
            first_light_table,
        };
        #[cfg(feature = "defmt")]
        defmt::info!(
            "DigitPanel::new: {}x{} panel, {} lights",
            panel.rows,
            panel.cols,
            N
        );
        Ok(panel)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of lights.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`: a panel has at least one light.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Where each column starts on the strip.
    #[must_use]
    pub const fn first_light_table(&self) -> &FirstLightTable<N> {
        &self.first_light_table
    }

    /// Encode `text` into logical bits sized for this panel.
    #[must_use]
    pub fn encode(&self, text: &str) -> BitCanvas<N> {
        font::encode(text)
    }

    /// Split a canvas into columns of `rows` bits, left to right.
    ///
    /// A trailing partial column is yielded at its natural length.
    pub fn column_groups<'a>(&self, canvas: &'a BitCanvas<N>) -> Chunks<'a, bool> {
        canvas.chunks(self.rows)
    }

    /// Reorder a canvas into physical wiring order.
    ///
    /// Columns 1, 3, 5, … are reversed; even columns are kept as they are.
    #[must_use]
    pub fn arrange(&self, canvas: &BitCanvas<N>) -> LightFrame<N> {
        let mut frame = LightFrame::from(canvas.0);
        for column in frame.chunks_mut(self.rows).skip(1).step_by(2) {
            column.reverse();
        }
        frame
    }

    /// Render `text` to the on/off state of every light, in wiring order.
    ///
    /// With `show`, also write a text preview of the panel: printed to stdout
    /// on the host, logged row by row through `defmt` on embedded targets.
    #[must_use]
    pub fn render(&self, text: &str, show: bool) -> LightFrame<N> {
        let canvas = self.encode(text);
        let frame = self.arrange(&canvas);
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "DigitPanel::render: {} of {} lights on",
            frame.lit_count(),
            N
        );
        if show {
            self.show(&frame);
        }
        frame
    }

    /// Write a text preview of `frame`, one line per row.
    ///
    /// Each light is written as its marker followed by a space.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    ///
    /// ```rust
    /// use digit_panel::DigitPanel;
    ///
    /// let panel = DigitPanel::<32>::new(8, 4)?;
    /// let frame = panel.render("7", false);
    ///
    /// let mut preview = String::new();
    /// panel.write_preview(&frame, &mut preview)?;
    /// let mut lines = preview.lines();
    /// assert_eq!(lines.next(), Some("1 1 1 1 "));
    /// assert!(lines.all(|line| line == "      1 "));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_preview<W: Write>(&self, frame: &LightFrame<N>, out: &mut W) -> fmt::Result {
        for row in 0..self.rows {
            self.write_preview_row(frame, row, out)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn write_preview_row<W: Write>(
        &self,
        frame: &LightFrame<N>,
        row: usize,
        out: &mut W,
    ) -> fmt::Result {
        for col in 0..self.cols {
            let lit = frame[self.first_light_table.light_index(row, col)];
            out.write_char(if lit { LIT_MARKER } else { DARK_MARKER })?;
            out.write_char(' ')?;
        }
        Ok(())
    }

    #[cfg(feature = "host")]
    fn show(&self, frame: &LightFrame<N>) {
        let mut preview = std::string::String::new();
        if self.write_preview(frame, &mut preview).is_ok() {
            std::print!("{preview}");
        }
    }

    #[cfg(all(not(feature = "host"), feature = "defmt"))]
    fn show(&self, frame: &LightFrame<N>) {
        for row in 0..self.rows {
            defmt::info!(
                "{}",
                PreviewRow {
                    panel: self,
                    frame,
                    row
                }
            );
        }
    }

    #[cfg(all(not(feature = "host"), not(feature = "defmt")))]
    fn show(&self, _frame: &LightFrame<N>) {}
}

#[cfg(all(not(feature = "host"), feature = "defmt"))]
struct PreviewRow<'a, const N: usize> {
    panel: &'a DigitPanel<N>,
    frame: &'a LightFrame<N>,
    row: usize,
}

#[cfg(all(not(feature = "host"), feature = "defmt"))]
impl<const N: usize> defmt::Format for PreviewRow<'_, N> {
    fn format(&self, f: defmt::Formatter<'_>) {
        for col in 0..self.panel.cols {
            let light_index = self.panel.first_light_table.light_index(self.row, col);
            let marker = if self.frame[light_index] { LIT_MARKER } else { DARK_MARKER };
            defmt::write!(f, "{} ", marker);
        }
    }
}
