use crate::types::{ClassifierConfig, RecordKind};
use dicom_object::InMemDicomObject;

use super::tags::{get_string_value, SERIES_DESCRIPTION};

/// Classifies a SeriesDescription value
///
/// # Algorithm
///
/// 1. Absent description → Unclassifiable
/// 2. Description contains any reference marker (case-insensitive) → Reference
/// 3. Otherwise → Slice
///
/// Never fails: classification ambiguity resolves to a kind, not an error.
pub fn classify_description(description: Option<&str>, config: &ClassifierConfig) -> RecordKind {
    match description {
        None => RecordKind::Unclassifiable,
        Some(desc) if config.matches(desc) => RecordKind::Reference,
        Some(_) => RecordKind::Slice,
    }
}

/// Classifies a DICOM object from its SeriesDescription
pub fn classify_dicom(dcm: &InMemDicomObject, config: &ClassifierConfig) -> RecordKind {
    let description = get_string_value(dcm, SERIES_DESCRIPTION);
    classify_description(description.as_deref(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};
    use rstest::rstest;

    #[rstest]
    #[case("Scout Face", RecordKind::Reference)]
    #[case("SCOUT FACE 120kV", RecordKind::Reference)]
    #[case("scout face", RecordKind::Reference)]
    #[case("Profil", RecordKind::Reference)]
    #[case("Scout profil", RecordKind::Reference)]
    #[case("Thorax 1.25mm", RecordKind::Slice)]
    #[case("Scout", RecordKind::Slice)]
    #[case("", RecordKind::Slice)]
    fn test_classify_description(#[case] description: &str, #[case] expected: RecordKind) {
        let config = ClassifierConfig::default();
        assert_eq!(classify_description(Some(description), &config), expected);
    }

    #[test]
    fn test_absent_description_is_unclassifiable() {
        let config = ClassifierConfig::default();
        assert_eq!(
            classify_description(None, &config),
            RecordKind::Unclassifiable
        );
    }

    #[test]
    fn test_classification_is_case_insensitive_and_stable() {
        let config = ClassifierConfig::default();
        let a = classify_description(Some("ProFil gauche"), &config);
        let b = classify_description(Some("PROFIL GAUCHE"), &config);
        assert_eq!(a, b);
        assert_eq!(a, classify_description(Some("ProFil gauche"), &config));
    }

    #[test]
    fn test_custom_marker() {
        let config = ClassifierConfig::default().with_marker("topogram");
        assert_eq!(
            classify_description(Some("Topogram 0.6 T20f"), &config),
            RecordKind::Reference
        );
    }

    #[test]
    fn test_classify_dicom() {
        let config = ClassifierConfig::default();

        let empty = InMemDicomObject::new_empty();
        assert_eq!(classify_dicom(&empty, &config), RecordKind::Unclassifiable);

        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            SERIES_DESCRIPTION,
            VR::LO,
            PrimitiveValue::from("Scout Face"),
        ));
        assert_eq!(classify_dicom(&dcm, &config), RecordKind::Reference);
    }
}
