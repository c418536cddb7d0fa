use std::fmt;

/// One sample of the exposure profile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ProfilePoint {
    /// Position along the scan axis in mm
    pub position: f64,
    /// Tube current-time product in mAs
    pub exposure: f64,
}

impl ProfilePoint {
    pub fn new(position: f64, exposure: f64) -> Self {
        Self { position, exposure }
    }
}

impl From<(f64, f64)> for ProfilePoint {
    fn from((position, exposure): (f64, f64)) -> Self {
        Self::new(position, exposure)
    }
}

/// Exposure (mAs) versus scan-axis position, ordered by descending position
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct ExposureProfile {
    points: Vec<ProfilePoint>,
}

impl ExposureProfile {
    /// Wraps points that are already in display order
    pub(crate) fn from_sorted(points: Vec<ProfilePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfilePoint> {
        self.points.iter()
    }

    /// Largest exposure value, `None` for an empty profile
    pub fn max_exposure(&self) -> Option<f64> {
        self.points.iter().map(|p| p.exposure).reduce(f64::max)
    }

    /// Returns (highest, lowest) position covered by the profile
    pub fn position_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold(
            (first.position, first.position),
            |(hi, lo), p| (hi.max(p.position), lo.min(p.position)),
        ))
    }

    /// Sum of all exposure values in mAs
    pub fn total_exposure(&self) -> f64 {
        self.points.iter().map(|p| p.exposure).sum()
    }
}

impl<'a> IntoIterator for &'a ExposureProfile {
    type Item = &'a ProfilePoint;
    type IntoIter = std::slice::Iter<'a, ProfilePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for ProfilePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "z={:.2} mm  {:.2} mAs", self.position, self.exposure)
    }
}
