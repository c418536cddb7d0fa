use crate::api::ModulationAnalysis;
use std::fmt;

/// Text report formatter for a modulation analysis
pub struct TextReport<'a> {
    analysis: &'a ModulationAnalysis,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(analysis: &'a ModulationAnalysis) -> Self {
        Self { analysis }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.analysis.profile;

        writeln!(f, "Scout View Modulation")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;

        for reference in &self.analysis.references {
            writeln!(f, "Scout:          {}", reference.record.file_path.display())?;
            writeln!(
                f,
                "  Description:  {}",
                reference
                    .record
                    .series_description
                    .as_deref()
                    .unwrap_or("unknown")
            )?;
            writeln!(f, "  Z start:      {:.2} mm", reference.geometry.z_start)?;
            writeln!(f, "  Z end:        {:.2} mm", reference.geometry.z_end)?;
            writeln!(f, "  Row spacing:  {:.4} mm", reference.geometry.row_spacing)?;
        }
        writeln!(f)?;

        writeln!(f, "Exposure Profile")?;
        writeln!(f, "----------------")?;
        writeln!(f, "Slices:         {}", profile.len())?;
        if let Some((high, low)) = profile.position_range() {
            writeln!(f, "Z range:        {:.2} → {:.2} mm", high, low)?;
        }
        if let Some(max) = profile.max_exposure() {
            writeln!(f, "Max exposure:   {:.2} mAs", max)?;
        }
        writeln!(f, "Total exposure: {:.2} mAs", profile.total_exposure())?;
        writeln!(f)?;

        for point in profile {
            writeln!(f, "  {}", point)?;
        }

        Ok(())
    }
}
