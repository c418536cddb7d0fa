//! Core type definitions for CT modulation analysis
//!
//! - [`RecordKind`]: Reference projection, slice, or unclassifiable
//! - [`ClassifierConfig`]: SeriesDescription markers identifying reference projections
//! - [`ExposureProfile`] / [`ProfilePoint`]: mAs versus scan-axis position
//! - [`ReferenceGeometry`]: Scan-axis extent of a reference projection
//! - [`AttributeRow`]: One row of the CT-Expo parameter table
//! - [`PixelSpacing`]: Decoded PixelSpacing pair

mod attributes;
mod classifier;
mod enums;
mod geometry;
mod pixel_spacing;
mod profile;

pub use attributes::{or_unknown, AttributeRow, ATTRIBUTE_COLUMNS, UNKNOWN};
pub use classifier::{ClassifierConfig, DEFAULT_REFERENCE_MARKERS};
pub use enums::RecordKind;
pub use geometry::ReferenceGeometry;
pub use pixel_spacing::PixelSpacing;
pub use profile::{ExposureProfile, ProfilePoint};
