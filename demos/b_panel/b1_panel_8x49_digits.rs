//! Render every digit on an 8×49 serpentine panel and preview it on the console.

use digit_panel::{DigitPanel, Result};

// 8 rows tall, 49 columns wide: ten 4-column digits plus nine 1-column spaces.
const ROWS: i32 = 8;
const COLS: i32 = 49;
const LIGHT_COUNT: usize = 392;

fn main() -> Result<()> {
    let panel = DigitPanel::<LIGHT_COUNT>::new(ROWS, COLS)?;

    // `true` also prints the text preview.
    let frame = panel.render("0 1 2 3 4 5 6 7 8 9", true);

    println!(
        "{} of {} lights on, first light of each column: {:?}",
        frame.lit_count(),
        panel.len(),
        panel.first_light_table().as_slice()
    );
    Ok(())
}
