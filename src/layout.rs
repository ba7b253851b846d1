//! Serpentine column wiring: where each column's lights start on the strip.
//!
//! See [`FirstLightTable`] for the wiring convention and an example.

use heapless::Vec;

use crate::{Error, Result};

/// Physical index of the light where each column is addressed from.
///
/// Panels are wired as one strip that snakes through the columns: down the
/// first column, up the second, down the third, and so on. Light 0 is the top
/// of column 0. For even columns the entry is the top light and rows count
/// up from it; for odd columns the entry is the top light too, but the strip
/// runs bottom-up there, so rows count down from it.
///
/// # Example
///
/// ```rust
/// use digit_panel::layout::build_first_light_table;
///
/// let table = build_first_light_table::<12>(3, 4)?;
/// assert_eq!(table.as_slice(), &[0, 5, 6, 11]);
/// assert_eq!(table.light_index(2, 1), 3);
/// # Ok::<(), digit_panel::Error>(())
/// ```
///
/// ```text
/// 3×4 panel (light index by position):
///
///   0  5  6 11   <- first-light table
///   1  4  7 10
///   2  3  8  9
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirstLightTable<const N: usize> {
    rows: usize,
    first_lights: Vec<usize, N>,
}

impl<const N: usize> FirstLightTable<N> {
    /// Table entries, one per column.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.first_lights
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.first_lights.len()
    }

    /// Always `false` for a table built by [`build_first_light_table`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_lights.is_empty()
    }

    /// Number of rows the table was built for.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Physical light index at `(row, col)`, with `(0, 0)` at the top-left.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the panel.
    #[must_use]
    pub fn light_index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows, "row out of bounds");
        let first = self.first_lights[col];
        if col % 2 == 0 { first + row } else { first - row }
    }
}

/// Build the first-light table for a `rows`×`cols` serpentine panel of `N` lights.
///
/// The walk goes two columns at a time. For each pair it records the top of
/// the odd column (`i + 2*rows - 1`) and the top of the next even column
/// (`i + 2*rows`). With an odd column count the walk overshoots the panel by
/// two entries; those are dropped so the table holds exactly `cols` entries.
///
/// # Errors
///
/// Returns [`Error::NonPositiveRows`] or [`Error::NonPositiveCols`] for an empty
/// panel, [`Error::LightCountMismatch`] if `rows * cols != N`, and
/// [`Error::FirstLightTable`] if the walk does not cover every column.
///
/// ```rust
/// use digit_panel::{Error, layout::build_first_light_table};
///
/// let table = build_first_light_table::<40>(8, 5)?;
/// assert_eq!(table.as_slice(), &[0, 15, 16, 31, 32]);
///
/// assert_eq!(
///     build_first_light_table::<12>(0, 4),
///     Err(Error::NonPositiveRows { rows: 0 })
/// );
/// # Ok::<(), Error>(())
/// ```
pub fn build_first_light_table<const N: usize>(rows: i32, cols: i32) -> Result<FirstLightTable<N>> {
    let (row_count, col_count) = checked_dimensions::<N>(rows, cols)?;
    let stride = 2 * row_count;

    let mut first_lights: Vec<usize, N> = Vec::new();
    let mut push = |first_light: usize| {
        if first_lights.len() < col_count {
            // cannot overflow: col_count <= N
            let _ = first_lights.push(first_light);
        }
    };

    push(0);
    let mut i = 0;
    while i < N {
        let first = i + stride - 1;
        i += stride;
        push(first);
        if i != N {
            push(i);
        }
    }

    if first_lights.len() != col_count {
        return Err(Error::FirstLightTable {
            expected: col_count,
            actual: first_lights.len(),
        });
    }

    Ok(FirstLightTable {
        rows: row_count,
        first_lights,
    })
}

/// Validate a panel geometry against its light count.
fn checked_dimensions<const N: usize>(rows: i32, cols: i32) -> Result<(usize, usize)> {
    let row_count = usize::try_from(rows)
        .ok()
        .filter(|&count| count > 0)
        .ok_or(Error::NonPositiveRows { rows })?;
    let col_count = usize::try_from(cols)
        .ok()
        .filter(|&count| count > 0)
        .ok_or(Error::NonPositiveCols { cols })?;

    if row_count.checked_mul(col_count) != Some(N) {
        return Err(Error::LightCountMismatch { rows, cols, len: N });
    }
    Ok((row_count, col_count))
}
