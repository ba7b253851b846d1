#![cfg(feature = "host")]
//! PNG previews of a rendered panel, for docs and debugging.

use crate::{DigitPanel, LightFrame};
use png::{BitDepth, ColorType, Encoder};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const LIT_LEVEL: f32 = 1.0;
const DARK_LEVEL: f32 = 0.12;

/// Render `frame` as seen on `panel` into a grayscale PNG file.
///
/// Each light is drawn as a soft-edged disc in its own square cell. The cell
/// size is the largest one that keeps the image within `target_max_dimension`
/// pixels on its longer side.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the PNG cannot be encoded.
///
/// # Panics
///
/// Panics if `target_max_dimension` is zero.
pub fn write_frame_png<const N: usize>(
    panel: &DigitPanel<N>,
    frame: &LightFrame<N>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<(), Box<dyn Error>> {
    let output_path = output_path.as_ref();
    let panel_width = u32::try_from(panel.cols())?;
    let panel_height = u32::try_from(panel.rows())?;
    let cell_size = select_cell_size(panel_width, panel_height, target_max_dimension);
    let led_margin = (cell_size / 8).max(1);
    let (width, height, pixels) = panel_pixels(panel, frame, cell_size, led_margin);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    println!("wrote PNG to {}", output_path.display());
    Ok(())
}

/// Largest cell size whose image fits in `target_max_dimension`.
pub(crate) fn select_cell_size(panel_width: u32, panel_height: u32, target_max_dimension: u32) -> u32 {
    assert!(target_max_dimension > 0, "target_max_dimension must be positive");
    let mut cell_size = target_max_dimension;
    while cell_size > 1 {
        let led_margin = (cell_size / 8).max(1);
        let border = cell_size.saturating_sub(led_margin * 2) / 2;
        let output_width = panel_width * cell_size + border * 2;
        let output_height = panel_height * cell_size + border * 2;
        if output_width.max(output_height) <= target_max_dimension {
            break;
        }
        cell_size -= 1;
    }
    cell_size
}

fn panel_pixels<const N: usize>(
    panel: &DigitPanel<N>,
    frame: &LightFrame<N>,
    cell_size: u32,
    led_margin: u32,
) -> (u32, u32, Vec<u8>) {
    let led_radius = cell_size.saturating_sub(led_margin * 2) / 2;
    let fade_width = (led_radius / 3).max(1);
    let border = led_radius;
    let width = (panel.cols() as u32) * cell_size + border * 2;
    let height = (panel.rows() as u32) * cell_size + border * 2;
    let mut bytes = vec![0u8; (width * height) as usize];

    let center = (cell_size as i32 - 1) / 2;
    let led_radius_f = led_radius as f32;
    let inner_radius_f = led_radius.saturating_sub(fade_width) as f32;
    let radius_sq = (led_radius as i32) * (led_radius as i32);
    let table = panel.first_light_table();

    for row_index in 0..panel.rows() {
        for column_index in 0..panel.cols() {
            let lit = frame[table.light_index(row_index, column_index)];
            let level = if lit { LIT_LEVEL } else { DARK_LEVEL };
            let cell_origin_x = (column_index as u32) * cell_size;
            let cell_origin_y = (row_index as u32) * cell_size;

            for local_y in 0..cell_size {
                let delta_y = local_y as i32 - center;
                for local_x in 0..cell_size {
                    let delta_x = local_x as i32 - center;
                    let distance_sq = delta_x * delta_x + delta_y * delta_y;
                    if distance_sq > radius_sq {
                        continue;
                    }
                    let distance = (distance_sq as f32).sqrt();
                    let intensity = if distance <= inner_radius_f {
                        1.0
                    } else {
                        let fade_span = led_radius_f - inner_radius_f;
                        (1.0 - (distance - inner_radius_f) / fade_span).max(0.0)
                    };
                    let x = border + cell_origin_x + local_x;
                    let y = border + cell_origin_y + local_y;
                    bytes[(y * width + x) as usize] = level_to_u8(level * intensity);
                }
            }
        }
    }

    (width, height, bytes)
}

fn level_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
