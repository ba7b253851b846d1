#![allow(missing_docs)]
//! Host-level tests for rendering text onto serpentine panels.

use digit_panel::{DigitPanel, Error, LightFrame};
use std::thread;

const DIGITS_TEXT: &str = "0 1 2 3 4 5 6 7 8 9";
const DIGITS_8X49_LIGHTS: &str = include_str!("data/digits_8x49_lights.txt");
const DIGITS_8X49_PREVIEW: &str = include_str!("data/digits_8x49_preview.txt");

type Panel8x49 = DigitPanel<392>;

fn bits_of(pattern: &str) -> Vec<bool> {
    pattern
        .chars()
        .filter(|ch| matches!(ch, '0' | '1'))
        .map(|ch| ch == '1')
        .collect()
}

fn panel_8x49() -> Panel8x49 {
    Panel8x49::new(8, 49).expect("8x49 is a valid panel")
}

#[test]
fn digits_8x49_match_golden_lights() {
    let frame = panel_8x49().render(DIGITS_TEXT, false);
    let expected = bits_of(DIGITS_8X49_LIGHTS);
    assert_eq!(expected.len(), 392);
    assert_eq!(frame.0.to_vec(), expected);
}

#[test]
fn digits_8x49_match_golden_preview() {
    let panel = panel_8x49();
    let frame = panel.render(DIGITS_TEXT, false);
    let mut preview = String::new();
    panel
        .write_preview(&frame, &mut preview)
        .expect("writing to a String cannot fail");
    assert_eq!(preview, DIGITS_8X49_PREVIEW);
}

#[test]
fn show_does_not_change_the_result() {
    let panel = panel_8x49();
    assert_eq!(
        panel.render(DIGITS_TEXT, true),
        panel.render(DIGITS_TEXT, false)
    );
}

#[test]
fn small_panels_reverse_odd_columns() {
    let panel = DigitPanel::<16>::new(4, 4).expect("4x4 is valid");
    assert_eq!(
        panel.render("2", false).0.to_vec(),
        bits_of("1001 1111 1001 1000")
    );

    let panel = DigitPanel::<8>::new(2, 4).expect("2x4 is valid");
    assert_eq!(panel.render("9", false).0.to_vec(), bits_of("11 11 00 10"));

    let panel = DigitPanel::<12>::new(3, 4).expect("3x4 is valid");
    assert_eq!(
        panel.render("8", false).0.to_vec(),
        bits_of("111 111 111 100")
    );

    let panel = DigitPanel::<32>::new(8, 4).expect("8x4 is valid");
    assert_eq!(
        panel.render("7", false).0.to_vec(),
        bits_of("10000000 00000001 10000000 11111111")
    );
}

#[test]
fn render_is_always_panel_sized() {
    let panel = DigitPanel::<12>::new(3, 4).expect("3x4 is valid");
    for text in ["", "1", "0 1 2 3 4 5 6 7 8 9 0 1 2 3", "abc", "  "] {
        let frame = panel.render(text, false);
        assert_eq!(frame.len(), 12, "{text:?}");
        assert!(frame.to_bits().iter().all(|&bit| bit <= 1));
    }
}

#[test]
fn empty_text_is_dark() {
    let frame = panel_8x49().render("", false);
    assert_eq!(frame, LightFrame::new());
    assert_eq!(frame.to_bits(), [0; 392]);
}

#[test]
fn render_is_repeatable() {
    let panel = panel_8x49();
    assert_eq!(panel.render("2024 12", false), panel.render("2024 12", false));
}

#[test]
fn unsupported_characters_are_dropped() {
    let panel = panel_8x49();
    assert_eq!(panel.render("1a2", false), panel.render("12", false));
    assert_eq!(
        panel.render("12:34.5", false),
        panel.render("12345", false)
    );
}

#[test]
fn long_text_is_truncated_to_the_panel() {
    // 12 digits encode to 384 bits, more than either panel holds.
    let small = DigitPanel::<64>::new(4, 16).expect("4x16 is valid");
    let large = DigitPanel::<192>::new(4, 48).expect("4x48 is valid");
    let text = "123456789012";

    let small_canvas = small.encode(text);
    let large_canvas = large.encode(text);
    assert_eq!(small_canvas.0[..], large_canvas.0[..64]);

    let small_frame = small.render(text, false);
    let large_frame = large.render(text, false);
    assert_eq!(small_frame.0[..], large_frame.0[..64]);
}

#[test]
fn preview_reads_the_panel_upright() {
    let panel = DigitPanel::<12>::new(3, 4).expect("3x4 is valid");
    let frame = LightFrame::from([
        true, false, false, // column 0, top-down
        false, false, true, // column 1, bottom-up: top light is index 5
        false, false, false, // column 2
        false, false, false, // column 3
    ]);
    let mut preview = String::new();
    panel
        .write_preview(&frame, &mut preview)
        .expect("writing to a String cannot fail");
    assert_eq!(preview, "1 1     \n        \n        \n");
}

#[test]
fn column_groups_split_by_rows() {
    let panel = DigitPanel::<12>::new(3, 4).expect("3x4 is valid");
    let canvas = panel.encode("8");
    let groups: Vec<&[bool]> = panel.column_groups(&canvas).collect();
    assert_eq!(groups.len(), 4);
    assert!(groups.iter().all(|group| group.len() == 3));
    assert_eq!(groups[3], &[false, false, true]);
}

#[test]
fn accessors_report_geometry() {
    let panel = panel_8x49();
    assert_eq!(panel.rows(), 8);
    assert_eq!(panel.cols(), 49);
    assert_eq!(panel.len(), 392);
    assert!(!panel.is_empty());
    assert_eq!(panel.first_light_table().len(), 49);
}

#[test]
fn invalid_geometry_yields_no_panel() {
    assert_eq!(
        DigitPanel::<0>::new(0, 49),
        Err(Error::NonPositiveRows { rows: 0 })
    );
    assert_eq!(
        DigitPanel::<8>::new(8, -1),
        Err(Error::NonPositiveCols { cols: -1 })
    );
    assert!(matches!(
        Panel8x49::new(8, 48),
        Err(Error::LightCountMismatch { .. })
    ));
}

#[test]
fn one_panel_renders_from_many_threads() {
    let panel = &panel_8x49();
    let expected = panel.render(DIGITS_TEXT, false);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || panel.render(DIGITS_TEXT, false)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("render thread panicked"), expected);
        }
    });
}
