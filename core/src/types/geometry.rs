use std::fmt;

/// Extent of a reference projection along the scan axis
///
/// The scout covers `[z_end, z_start]`; row `i` of the image sits at
/// `z_start - i * row_spacing`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ReferenceGeometry {
    pub z_start: f64,
    pub z_end: f64,
    pub row_spacing: f64,
}

impl ReferenceGeometry {
    pub fn new(z_start: f64, z_end: f64, row_spacing: f64) -> Self {
        Self {
            z_start,
            z_end,
            row_spacing,
        }
    }

    /// Scanned length in mm (positive when z decreases along the image)
    pub fn scout_length(&self) -> f64 {
        self.z_start - self.z_end
    }

    /// Scan-axis position of an image row
    pub fn position_of_row(&self, row: usize) -> f64 {
        self.z_start - row as f64 * self.row_spacing
    }
}

impl fmt::Display for ReferenceGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "z {:.2} → {:.2} mm ({:.4} mm/row)",
            self.z_start, self.z_end, self.row_spacing
        )
    }
}
