use serde::Serialize;

/// Rendering of an absent attribute in the CT-Expo table
pub const UNKNOWN: &str = "Unknown";

/// Column names of the CT-Expo table, in output order
pub const ATTRIBUTE_COLUMNS: [&str; 8] = [
    "PatientID",
    "StudyDate",
    "Modality",
    "KVP",
    "XRayTubeCurrent",
    "ExposureTime",
    "SliceThickness",
    "Manufacturer",
];

/// Acquisition parameters of one file, as needed for CT-Expo dose estimates
///
/// Every field holds the source text of its tag; absent tags hold [`UNKNOWN`].
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "StudyDate")]
    pub study_date: String,
    #[serde(rename = "Modality")]
    pub modality: String,
    #[serde(rename = "KVP")]
    pub kvp: String,
    #[serde(rename = "XRayTubeCurrent")]
    pub x_ray_tube_current: String,
    #[serde(rename = "ExposureTime")]
    pub exposure_time: String,
    #[serde(rename = "SliceThickness")]
    pub slice_thickness: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
}

impl Default for AttributeRow {
    fn default() -> Self {
        Self {
            patient_id: UNKNOWN.to_string(),
            study_date: UNKNOWN.to_string(),
            modality: UNKNOWN.to_string(),
            kvp: UNKNOWN.to_string(),
            x_ray_tube_current: UNKNOWN.to_string(),
            exposure_time: UNKNOWN.to_string(),
            slice_thickness: UNKNOWN.to_string(),
            manufacturer: UNKNOWN.to_string(),
        }
    }
}

/// Stringifies an optional attribute, falling back to [`UNKNOWN`]
pub fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_unknown() {
        let row = AttributeRow::default();
        assert_eq!(row.patient_id, "Unknown");
        assert_eq!(row.manufacturer, "Unknown");
    }

    #[test]
    fn test_or_unknown() {
        assert_eq!(or_unknown(Some("120.0")), "120.0");
        assert_eq!(or_unknown(Some("")), "");
        assert_eq!(or_unknown::<String>(None), "Unknown");
    }
}
