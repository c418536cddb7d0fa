use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Patient/Study Tags
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

// Acquisition Tags
pub const KVP: Tag = Tag(0x0018, 0x0060);
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
pub const REVOLUTION_TIME: Tag = Tag(0x0018, 0x9305);

// Image Geometry Tags
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get a real value from DICOM tag
///
/// Decimal strings, integer strings and binary floats are all accepted.
/// Returns `None` if the tag is absent, empty or not numeric.
pub fn get_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<f64> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_float64().ok())
}

/// Helper to get all real values of a multi-valued DICOM tag
pub fn get_multi_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<f64>> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_multi_float64().ok())
        .filter(|values| !values.is_empty())
}

/// Helper to get u16 value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to u16
pub fn get_u16_value(dcm: &InMemDicomObject, tag: Tag) -> Option<u16> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<u16>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};
    use dicom_dictionary_std::tags;

    #[test]
    fn test_tag_values() {
        assert_eq!(SLICE_THICKNESS, tags::SLICE_THICKNESS);
        assert_eq!(SPACING_BETWEEN_SLICES, tags::SPACING_BETWEEN_SLICES);
        assert_eq!(X_RAY_TUBE_CURRENT, tags::X_RAY_TUBE_CURRENT);
        assert_eq!(REVOLUTION_TIME, tags::REVOLUTION_TIME);
        assert_eq!(IMAGE_POSITION_PATIENT, tags::IMAGE_POSITION_PATIENT);
        assert_eq!(EXPOSURE_TIME, tags::EXPOSURE_TIME);
        assert_eq!(KVP, tags::KVP);
        assert_eq!(PIXEL_DATA, tags::PIXEL_DATA);
    }

    #[test]
    fn test_float_from_decimal_string() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            SLICE_THICKNESS,
            VR::DS,
            PrimitiveValue::from("2.5"),
        ));
        assert_eq!(get_float_value(&dcm, SLICE_THICKNESS), Some(2.5));
    }

    #[test]
    fn test_missing_values_are_none() {
        let dcm = InMemDicomObject::new_empty();
        assert!(get_string_value(&dcm, SERIES_DESCRIPTION).is_none());
        assert!(get_float_value(&dcm, SLICE_THICKNESS).is_none());
        assert!(get_multi_float_value(&dcm, IMAGE_POSITION_PATIENT).is_none());
        assert!(get_u16_value(&dcm, ROWS).is_none());
    }

    #[test]
    fn test_multi_float() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            IMAGE_POSITION_PATIENT,
            VR::DS,
            PrimitiveValue::Strs(
                vec!["-250".to_string(), "-250".to_string(), "100.5".to_string()].into(),
            ),
        ));
        assert_eq!(
            get_multi_float_value(&dcm, IMAGE_POSITION_PATIENT),
            Some(vec![-250.0, -250.0, 100.5])
        );
    }
}
