//! Overlay of an exposure profile on its reference projection
//!
//! The scout is rotated 90° counter-clockwise so that its rows run along the
//! horizontal scan axis, stretched over `[z_start, z_end]`, and the profile is
//! drawn as a polyline in the same coordinates. The vertical axis is shared
//! between the scout's physical width (mm) and the exposure (mAs).

use crate::error::Result;
use crate::record::Record;
use crate::types::{ExposureProfile, ReferenceGeometry};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use ndarray::Array2;
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Output size and styling of rendered overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub line_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            line_color: [255, 0, 0],
        }
    }
}

impl RenderConfig {
    /// Builder: set the output size in pixels (at least 2x2)
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(2);
        self.height = height.max(2);
        self
    }

    /// Builder: set the profile line color
    pub fn with_line_color(mut self, color: [u8; 3]) -> Self {
        self.line_color = color;
        self
    }
}

/// Physical extent of the scout across the scan axis, in mm
///
/// Uses `columns * PixelSpacing[col]` when both are known, otherwise falls
/// back to `rows * row_spacing`.
pub fn vertical_extent(reference: &Record, geometry: &ReferenceGeometry) -> f64 {
    match (reference.columns, reference.pixel_spacing) {
        (Some(cols), Some(spacing)) if cols > 0 => f64::from(cols) * spacing.col,
        _ => f64::from(reference.rows.unwrap_or(0)) * geometry.row_spacing,
    }
}

/// Maps data coordinates onto the canvas
struct Axes {
    z_start: f64,
    z_span: f64,
    y_max: f64,
    width: f64,
    height: f64,
}

impl Axes {
    fn x(&self, z: f64) -> f64 {
        if self.z_span == 0.0 {
            0.0
        } else {
            (z - self.z_start) / self.z_span * (self.width - 1.0)
        }
    }

    fn y(&self, value: f64) -> f64 {
        (1.0 - value / self.y_max) * (self.height - 1.0)
    }
}

/// Renders the scout with the exposure profile drawn over it
pub fn render_overlay(
    scout: &Array2<f32>,
    geometry: &ReferenceGeometry,
    extent: f64,
    profile: &ExposureProfile,
    config: &RenderConfig,
) -> RgbImage {
    let y_max = profile
        .max_exposure()
        .map_or(extent, |max| max.max(extent));
    let axes = Axes {
        z_start: geometry.z_start,
        z_span: geometry.z_end - geometry.z_start,
        y_max: if y_max > 0.0 { y_max } else { 1.0 },
        width: f64::from(config.width),
        height: f64::from(config.height),
    };

    let mut canvas = RgbImage::from_pixel(config.width, config.height, BACKGROUND);
    draw_scout(&mut canvas, scout, axes.y(extent.max(0.0)));
    draw_profile(&mut canvas, &axes, profile, Rgb(config.line_color));
    canvas
}

/// Writes an overlay as PNG (format chosen from the extension)
pub fn save_overlay(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path)?;
    Ok(())
}

fn draw_scout(canvas: &mut RgbImage, scout: &Array2<f32>, top: f64) {
    let (rows, cols) = scout.dim();
    if rows == 0 || cols == 0 {
        return;
    }

    let (min, max) = scout
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = if max > min { max - min } else { 1.0 };

    let width = canvas.width() as usize;
    let height = canvas.height() as usize;
    let top = (top.max(0.0) as usize).min(height);
    let band = height - top;
    if band == 0 {
        return;
    }

    for py in top..height {
        // Rotated row i is original column cols - 1 - i
        let i = ((py - top) * cols / band).min(cols - 1);
        for px in 0..width {
            let j = (px * rows / width).min(rows - 1);
            let value = scout[[j, cols - 1 - i]];
            let level = if value.is_finite() {
                (((value - min) / range).clamp(0.0, 1.0) * 255.0) as u8
            } else {
                0
            };
            canvas.put_pixel(px as u32, py as u32, Rgb([level, level, level]));
        }
    }
}

fn draw_profile(canvas: &mut RgbImage, axes: &Axes, profile: &ExposureProfile, color: Rgb<u8>) {
    let points: Vec<(f32, f32)> = profile
        .iter()
        .map(|p| (axes.x(p.position) as f32, axes.y(p.exposure) as f32))
        .collect();

    if let [(x, y)] = points.as_slice() {
        draw_line_segment_mut(canvas, (*x, *y), (*x, *y), color);
        return;
    }

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        draw_line_segment_mut(canvas, start, end, color);
        // Second pass one pixel lower for a 2px line
        draw_line_segment_mut(canvas, (start.0, start.1 + 1.0), (end.0, end.1 + 1.0), color);
    }
}
