use std::fmt;

/// Role of a record within a CT study
///
/// A record is a reference projection (scout / topogram), a cross-sectional
/// slice of the main series, or neither when its SeriesDescription is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum RecordKind {
    Reference,
    Slice,
    Unclassifiable,
}

impl RecordKind {
    /// Returns whether this is a reference projection
    pub fn is_reference(&self) -> bool {
        matches!(self, RecordKind::Reference)
    }

    /// Returns whether this is a cross-sectional slice
    pub fn is_slice(&self) -> bool {
        matches!(self, RecordKind::Slice)
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            RecordKind::Reference => "reference",
            RecordKind::Slice => "slice",
            RecordKind::Unclassifiable => "unclassifiable",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
