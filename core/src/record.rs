use crate::error::{Result, ScoutmodError};
use crate::extraction::classify_description;
use crate::extraction::tags::{
    get_float_value, get_multi_float_value, get_string_value, get_u16_value, COLUMNS,
    EXPOSURE_TIME, IMAGE_POSITION_PATIENT, KVP, MANUFACTURER, MODALITY, PATIENT_ID, PIXEL_DATA,
    PIXEL_SPACING, REVOLUTION_TIME, ROWS, SERIES_DESCRIPTION, SLICE_THICKNESS,
    SPACING_BETWEEN_SLICES, STUDY_DATE, X_RAY_TUBE_CURRENT,
};
use crate::types::{or_unknown, AttributeRow, ClassifierConfig, PixelSpacing, RecordKind};
use dicom::pixeldata::PixelDecoder;
use dicom_object::{open_file, DefaultDicomObject, InMemDicomObject};
use ndarray::{s, Array2};
use std::path::{Path, PathBuf};

/// Attributes of one DICOM file used for modulation analysis
///
/// Every attribute is a typed optional; absent or malformed tags never fail
/// the read. Computations that need an attribute go through the `require_*`
/// accessors, which report [`ScoutmodError::MissingField`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Path to the DICOM file
    pub file_path: PathBuf,

    pub patient_id: Option<String>,
    pub study_date: Option<String>,
    pub modality: Option<String>,
    pub manufacturer: Option<String>,
    pub series_description: Option<String>,

    /// Peak kilovoltage
    pub kvp: Option<f64>,
    /// Tube current in mA
    pub x_ray_tube_current: Option<f64>,
    /// Exposure time in ms
    pub exposure_time: Option<f64>,
    /// Gantry revolution time in s
    pub revolution_time: Option<f64>,
    /// Slice thickness in mm (scanned length for a scout)
    pub slice_thickness: Option<f64>,
    pub spacing_between_slices: Option<f64>,
    /// Third component of ImagePositionPatient
    pub image_position_z: Option<f64>,

    pub rows: Option<u16>,
    pub columns: Option<u16>,
    pub pixel_spacing: Option<PixelSpacing>,

    /// First frame, first sample of the pixel data (only when requested)
    pub pixel_data: Option<Array2<f32>>,
}

impl Record {
    /// Reads the header attributes of a DICOM file
    ///
    /// The file is opened, parsed and released before returning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dcm = Self::open_dicom(path)?;
        Ok(Self::from_dicom(path, &dcm))
    }

    /// Reads a file, decoding pixel data only for reference projections
    pub fn open_classified(path: impl AsRef<Path>, config: &ClassifierConfig) -> Result<Self> {
        let path = path.as_ref();
        let dcm = Self::open_dicom(path)?;
        let mut record = Self::from_dicom(path, &dcm);
        if dcm.element(PIXEL_DATA).is_ok() && record.kind(config).is_reference() {
            record.pixel_data = Some(decode_first_frame(path, &dcm)?);
        }
        Ok(record)
    }

    /// Creates a record from an already-parsed DICOM object
    pub fn from_dicom(path: impl Into<PathBuf>, dcm: &InMemDicomObject) -> Self {
        let pixel_spacing = get_multi_float_value(dcm, PIXEL_SPACING)
            .and_then(|values| PixelSpacing::from_values(&values))
            .or_else(|| {
                get_string_value(dcm, PIXEL_SPACING).and_then(|s| PixelSpacing::parse(&s).ok())
            });

        Self {
            file_path: path.into(),
            patient_id: get_string_value(dcm, PATIENT_ID),
            study_date: get_string_value(dcm, STUDY_DATE),
            modality: get_string_value(dcm, MODALITY),
            manufacturer: get_string_value(dcm, MANUFACTURER),
            series_description: get_string_value(dcm, SERIES_DESCRIPTION),
            kvp: get_float_value(dcm, KVP),
            x_ray_tube_current: get_float_value(dcm, X_RAY_TUBE_CURRENT),
            exposure_time: get_float_value(dcm, EXPOSURE_TIME),
            revolution_time: get_float_value(dcm, REVOLUTION_TIME),
            slice_thickness: get_float_value(dcm, SLICE_THICKNESS),
            spacing_between_slices: get_float_value(dcm, SPACING_BETWEEN_SLICES),
            image_position_z: get_multi_float_value(dcm, IMAGE_POSITION_PATIENT)
                .and_then(|pos| pos.get(2).copied()),
            rows: get_u16_value(dcm, ROWS),
            columns: get_u16_value(dcm, COLUMNS),
            pixel_spacing,
            pixel_data: None,
        }
    }

    fn open_dicom(path: &Path) -> Result<DefaultDicomObject> {
        open_file(path).map_err(|e| ScoutmodError::read(path, e))
    }

    /// Classifies this record from its SeriesDescription
    pub fn kind(&self, config: &ClassifierConfig) -> RecordKind {
        classify_description(self.series_description.as_deref(), config)
    }

    /// Spacing between slices, defaulting to the slice thickness
    pub fn spacing_between_slices_or_thickness(&self) -> Option<f64> {
        self.spacing_between_slices.or(self.slice_thickness)
    }

    pub fn require_slice_thickness(&self) -> Result<f64> {
        self.require(self.slice_thickness, "SliceThickness")
    }

    pub fn require_image_position_z(&self) -> Result<f64> {
        self.require(self.image_position_z, "ImagePositionPatient")
    }

    pub fn require_x_ray_tube_current(&self) -> Result<f64> {
        self.require(self.x_ray_tube_current, "XRayTubeCurrent")
    }

    pub fn require_revolution_time(&self) -> Result<f64> {
        self.require(self.revolution_time, "RevolutionTime")
    }

    /// Number of rows; zero counts as absent
    pub fn require_rows(&self) -> Result<u16> {
        self.require(self.rows.filter(|&r| r > 0), "Rows")
    }

    fn require<T>(&self, value: Option<T>, field: &'static str) -> Result<T> {
        value.ok_or_else(|| ScoutmodError::MissingField {
            field,
            path: self.file_path.clone(),
        })
    }
}

/// Reads the CT-Expo table row of a DICOM file
///
/// # Errors
///
/// `Read` when the file cannot be opened or parsed.
pub fn read_attribute_row(path: impl AsRef<Path>) -> Result<AttributeRow> {
    let dcm = Record::open_dicom(path.as_ref())?;
    Ok(attribute_row(&dcm))
}

/// CT-Expo table row of a parsed DICOM object
///
/// Values keep their trimmed source text, so a DS of `"120.0"` stays
/// `"120.0"`. Only absent tags become [`UNKNOWN`](crate::types::UNKNOWN).
pub fn attribute_row(dcm: &InMemDicomObject) -> AttributeRow {
    AttributeRow {
        patient_id: or_unknown(get_string_value(dcm, PATIENT_ID)),
        study_date: or_unknown(get_string_value(dcm, STUDY_DATE)),
        modality: or_unknown(get_string_value(dcm, MODALITY)),
        kvp: or_unknown(get_string_value(dcm, KVP)),
        x_ray_tube_current: or_unknown(get_string_value(dcm, X_RAY_TUBE_CURRENT)),
        exposure_time: or_unknown(get_string_value(dcm, EXPOSURE_TIME)),
        slice_thickness: or_unknown(get_string_value(dcm, SLICE_THICKNESS)),
        manufacturer: or_unknown(get_string_value(dcm, MANUFACTURER)),
    }
}

fn decode_first_frame(path: &Path, dcm: &DefaultDicomObject) -> Result<Array2<f32>> {
    let decoded = dcm
        .decode_pixel_data()
        .map_err(|e| ScoutmodError::read(path, e))?;
    let frames = decoded
        .to_ndarray::<f32>()
        .map_err(|e| ScoutmodError::read(path, e))?;
    Ok(frames.slice_move(s![0, .., .., 0]))
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};
    use tempfile::TempDir;

    #[test]
    fn test_from_dicom_slice() {
        let dcm = slice_object("Thorax", 2.0, 100.0, 200.0, 0.5);
        let record = Record::from_dicom("a.dcm", &dcm);

        assert_eq!(record.series_description.as_deref(), Some("Thorax"));
        assert_eq!(record.slice_thickness, Some(2.0));
        assert_eq!(record.image_position_z, Some(100.0));
        assert_eq!(record.x_ray_tube_current, Some(200.0));
        assert_eq!(record.revolution_time, Some(0.5));
        assert_eq!(record.kind(&ClassifierConfig::default()), RecordKind::Slice);
    }

    #[test]
    fn test_missing_fields_degrade_to_none() {
        let record = Record::from_dicom("empty.dcm", &InMemDicomObject::new_empty());
        assert!(record.patient_id.is_none());
        assert!(record.slice_thickness.is_none());
        assert!(record.pixel_spacing.is_none());
        assert!(record.pixel_data.is_none());
        assert_eq!(
            record.kind(&ClassifierConfig::default()),
            RecordKind::Unclassifiable
        );
    }

    #[test]
    fn test_require_reports_field_and_path() {
        let record = Record::from_dicom("empty.dcm", &InMemDicomObject::new_empty());
        match record.require_slice_thickness() {
            Err(ScoutmodError::MissingField { field, path }) => {
                assert_eq!(field, "SliceThickness");
                assert_eq!(path, PathBuf::from("empty.dcm"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_zero_rows_is_missing() {
        let record = Record::from_dicom("scout.dcm", &reference_object(400.0, 50.0, 0));
        assert!(matches!(
            record.require_rows(),
            Err(ScoutmodError::MissingField { field: "Rows", .. })
        ));
    }

    #[test]
    fn test_spacing_defaults_to_thickness() {
        let mut dcm = slice_object("Thorax", 1.25, 0.0, 100.0, 1.0);
        let record = Record::from_dicom("a.dcm", &dcm);
        assert_eq!(record.spacing_between_slices_or_thickness(), Some(1.25));

        dcm.put(DataElement::new(
            SPACING_BETWEEN_SLICES,
            VR::DS,
            PrimitiveValue::from("0.8"),
        ));
        let record = Record::from_dicom("a.dcm", &dcm);
        assert_eq!(record.spacing_between_slices_or_thickness(), Some(0.8));
    }

    #[test]
    fn test_pixel_spacing_from_ds_values() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            PIXEL_SPACING,
            VR::DS,
            PrimitiveValue::Strs(vec!["0.5".to_string(), "0.75".to_string()].into()),
        ));
        let record = Record::from_dicom("a.dcm", &dcm);
        assert_eq!(record.pixel_spacing, Some(PixelSpacing::new(0.5, 0.75)));
    }

    #[test]
    fn test_attribute_row_defaults() {
        let mut dcm = slice_object("Thorax", 2.0, 100.0, 200.0, 0.5);
        dcm.put(DataElement::new(
            MANUFACTURER,
            VR::LO,
            PrimitiveValue::from("ACME"),
        ));
        let row = attribute_row(&dcm);

        assert_eq!(row.patient_id, "Unknown");
        assert_eq!(row.x_ray_tube_current, "200");
        assert_eq!(row.slice_thickness, "2");
        assert_eq!(row.manufacturer, "ACME");
        assert_eq!(row.kvp, "Unknown");
    }

    #[test]
    fn test_attribute_row_keeps_source_text() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(KVP, VR::DS, PrimitiveValue::from("120.0")));
        dcm.put(DataElement::new(
            SLICE_THICKNESS,
            VR::DS,
            PrimitiveValue::from("1.250"),
        ));
        dcm.put(DataElement::new(
            EXPOSURE_TIME,
            VR::DS,
            PrimitiveValue::from("n/a"),
        ));
        dcm.put(DataElement::new(X_RAY_TUBE_CURRENT, VR::IS, PrimitiveValue::from("")));
        let row = attribute_row(&dcm);

        assert_eq!(row.kvp, "120.0");
        assert_eq!(row.slice_thickness, "1.250");
        assert_eq!(row.exposure_time, "n/a");
        assert_eq!(row.x_ray_tube_current, "");
        assert_eq!(row.manufacturer, "Unknown");
    }

    #[test]
    fn test_read_attribute_row_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slice.dcm");
        write_object(&path, slice_object("Thorax", 2.0, 100.0, 200.0, 0.5), "1.2.3.1");

        let row = read_attribute_row(&path).unwrap();
        assert_eq!(row.slice_thickness, "2");
        assert!(read_attribute_row(temp_dir.path().join("absent.dcm"))
            .unwrap_err()
            .is_read_error());
    }

    #[test]
    fn test_open_classified_without_pixel_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scout.dcm");
        write_object(&path, reference_object(400.0, 50.0, 200), "1.2.3.2");

        let record = Record::open_classified(&path, &ClassifierConfig::default()).unwrap();
        assert!(record.kind(&ClassifierConfig::default()).is_reference());
        assert!(record.pixel_data.is_none());
    }

    #[test]
    fn test_open_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slice.dcm");
        write_object(&path, slice_object("Thorax", 2.0, 100.0, 200.0, 0.5), "1.2.3.1");

        let record = Record::open(&path).unwrap();
        assert_eq!(record.file_path, path);
        assert_eq!(record.slice_thickness, Some(2.0));
        assert_eq!(record.image_position_z, Some(100.0));
    }

    #[test]
    fn test_open_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Record::open(temp_dir.path().join("absent.dcm")).unwrap_err();
        assert!(err.is_read_error());
    }

    #[test]
    fn test_open_garbage_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.dcm");
        std::fs::write(&path, b"this is not a DICOM file").unwrap();
        assert!(Record::open(&path).unwrap_err().is_read_error());
    }
}
