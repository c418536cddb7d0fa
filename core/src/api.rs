use crate::alignment::align;
use crate::collect::collect_dicom_files;
use crate::error::{Result, ScoutmodError};
use crate::profile::ProfileBuilder;
use crate::record::Record;
use crate::render::{render_overlay, vertical_extent, RenderConfig};
use crate::types::{ClassifierConfig, ExposureProfile, RecordKind, ReferenceGeometry};
use image::RgbImage;
use log::{debug, info};
use std::path::Path;

/// A reference projection with its scan-axis geometry
#[derive(Debug, Clone)]
pub struct AlignedReference {
    pub record: Record,
    pub geometry: ReferenceGeometry,
}

impl AlignedReference {
    /// Physical extent across the scan axis in mm
    pub fn vertical_extent(&self) -> f64 {
        vertical_extent(&self.record, &self.geometry)
    }
}

/// Tube current modulation of one CT acquisition
///
/// Combines the exposure profile of the slice series with every reference
/// projection found next to it.
///
/// # Example
///
/// ```no_run
/// use scoutmod_core::{ClassifierConfig, ModulationAnalysis, RenderConfig};
/// use std::path::Path;
///
/// let analysis =
///     ModulationAnalysis::from_directory(Path::new("study/"), &ClassifierConfig::default())?;
/// for (i, reference) in analysis.references.iter().enumerate() {
///     let canvas = analysis.render(reference, &RenderConfig::default())?;
///     canvas.save(format!("overlay_{}.png", i))?;
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ModulationAnalysis {
    pub profile: ExposureProfile,
    pub references: Vec<AlignedReference>,
}

impl ModulationAnalysis {
    /// Analyses the `.dcm` files directly inside `directory`
    ///
    /// Files are processed in path order, which fixes the slice order used
    /// for position accumulation.
    ///
    /// # Errors
    ///
    /// - `Read` for the first file that cannot be read
    /// - `NoInput` when there are no files, no reference or no slices
    /// - `MissingField` when a slice or reference lacks a required attribute
    pub fn from_directory(directory: &Path, config: &ClassifierConfig) -> Result<Self> {
        let files = collect_dicom_files(directory, false)?;
        if files.is_empty() {
            return Err(ScoutmodError::NoInput(format!(
                "no DICOM files (.dcm) in {}",
                directory.display()
            )));
        }
        info!("Found {} DICOM files", files.len());

        let records = files
            .iter()
            .map(|path| Record::open_classified(path, config))
            .collect::<Result<Vec<_>>>()?;

        Self::from_records(records, config)
    }

    /// Analyses records already read, in slice order
    pub fn from_records(records: Vec<Record>, config: &ClassifierConfig) -> Result<Self> {
        let (references, others): (Vec<_>, Vec<_>) = records
            .into_iter()
            .partition(|r| r.kind(config) == RecordKind::Reference);

        if references.is_empty() {
            return Err(ScoutmodError::NoInput("no scout files found".to_string()));
        }

        let profile = ProfileBuilder::new(config.clone()).build_from_records(&others)?;
        if profile.is_empty() {
            return Err(ScoutmodError::NoInput("no slice records found".to_string()));
        }
        info!(
            "Built exposure profile from {} slices ({} references)",
            profile.len(),
            references.len()
        );

        let references = references
            .into_iter()
            .map(|record| {
                let geometry = align(&record)?;
                debug!("{}: {}", record.file_path.display(), geometry);
                Ok(AlignedReference { record, geometry })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            profile,
            references,
        })
    }

    /// Renders the profile over one reference projection
    ///
    /// # Errors
    ///
    /// `MissingField` when the reference carries no decoded pixel data.
    pub fn render(&self, reference: &AlignedReference, config: &RenderConfig) -> Result<RgbImage> {
        let scout = reference
            .record
            .pixel_data
            .as_ref()
            .ok_or_else(|| ScoutmodError::MissingField {
                field: "PixelData",
                path: reference.record.file_path.clone(),
            })?;

        Ok(render_overlay(
            scout,
            &reference.geometry,
            reference.vertical_extent(),
            &self.profile,
            config,
        ))
    }
}
