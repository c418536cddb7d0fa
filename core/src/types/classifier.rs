/// Marker phrases identifying reference projection records
pub const DEFAULT_REFERENCE_MARKERS: &[&str] = &["scout face", "profil"];

/// Configuration for classifying records by SeriesDescription
///
/// A record whose description contains any of the markers (case-insensitive)
/// is a reference projection. The frontal ("scout face") and lateral
/// ("profil") markers both map to the same reference role.
///
/// # Example
///
/// ```
/// use scoutmod_core::ClassifierConfig;
///
/// let config = ClassifierConfig::default().with_marker("Topogram");
///
/// assert!(config.markers.contains(&"topogram".to_string()));
/// assert_eq!(config.markers.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifierConfig {
    /// Lowercased marker phrases
    pub markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            markers: DEFAULT_REFERENCE_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl ClassifierConfig {
    /// Creates a config with no markers
    ///
    /// Every described record is then a slice.
    pub fn empty() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Builder: add one marker phrase
    pub fn with_marker(mut self, marker: impl AsRef<str>) -> Self {
        let marker = marker.as_ref().trim().to_lowercase();
        if !marker.is_empty() && !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    /// Builder: add several marker phrases
    pub fn with_markers<I, S>(self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        markers.into_iter().fold(self, |cfg, m| cfg.with_marker(m))
    }

    /// Checks whether a lowercased description contains any marker
    pub fn matches(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        self.markers.iter().any(|m| description.contains(m.as_str()))
    }
}
