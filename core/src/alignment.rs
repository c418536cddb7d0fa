use crate::error::Result;
use crate::record::Record;
use crate::types::ReferenceGeometry;

/// Computes where a reference projection lies on the scan axis
///
/// The scout's SliceThickness holds the scanned length. The image starts at
/// ImagePositionPatient z and extends towards lower z; rows are spread evenly
/// over the scanned length.
///
/// # Errors
///
/// `MissingField` when SliceThickness or ImagePositionPatient is absent, or
/// when Rows is absent or zero.
pub fn align(reference: &Record) -> Result<ReferenceGeometry> {
    let scout_length = reference.require_slice_thickness()?;
    let z_start = reference.require_image_position_z()?;
    let rows = reference.require_rows()?;

    let z_end = z_start - scout_length;
    let row_spacing = scout_length / f64::from(rows);

    Ok(ReferenceGeometry::new(z_start, z_end, row_spacing))
}
