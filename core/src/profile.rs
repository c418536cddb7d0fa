//! Exposure profile reconstruction
//!
//! Slice positions are derived by accumulation: the first slice anchors the
//! profile at its ImagePositionPatient z, and every following slice moves the
//! position down by its own SliceThickness. Because each position depends on
//! every slice before it, any unreadable or incomplete slice aborts the build.

use crate::error::Result;
use crate::record::Record;
use crate::types::{ClassifierConfig, ExposureProfile, ProfilePoint, RecordKind};
use log::debug;
use std::borrow::Borrow;
use std::path::Path;

/// Accumulator threaded through the fold
#[derive(Debug, Default)]
struct Accumulator {
    current_position: Option<f64>,
    points: Vec<ProfilePoint>,
}

impl Accumulator {
    fn push(mut self, record: &Record) -> Result<Self> {
        let thickness = record.require_slice_thickness()?;

        // Spacing is not used for the decrement, only reported when it differs
        if let Some(spacing) = record.spacing_between_slices_or_thickness() {
            if spacing != thickness {
                debug!(
                    "{}: SpacingBetweenSlices {} differs from SliceThickness {}",
                    record.file_path.display(),
                    spacing,
                    thickness
                );
            }
        }

        let position = match self.current_position {
            None => record.require_image_position_z()?,
            Some(previous) => previous - thickness,
        };
        let exposure = record.require_x_ray_tube_current()? * record.require_revolution_time()?;

        self.current_position = Some(position);
        self.points.push(ProfilePoint::new(position, exposure));
        Ok(self)
    }

    fn finish(self) -> ExposureProfile {
        let mut points = self.points;
        // Stable: equal positions keep input order
        points.sort_by(|a, b| b.position.total_cmp(&a.position));
        ExposureProfile::from_sorted(points)
    }
}

/// Builds exposure profiles from ordered slice records
///
/// # Example
///
/// ```
/// use scoutmod_core::{ClassifierConfig, ProfileBuilder, Record};
///
/// let builder = ProfileBuilder::new(ClassifierConfig::default());
/// let profile = builder.build_from_records(Vec::<Record>::new()).unwrap();
/// assert!(profile.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    config: ClassifierConfig,
}

impl ProfileBuilder {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Reads every path in order and builds the profile from its slices
    ///
    /// Each file is opened, read and released before the next one. Reference
    /// and unclassifiable records are skipped; a read failure aborts.
    pub fn build<P: AsRef<Path>>(&self, paths: &[P]) -> Result<ExposureProfile> {
        paths
            .iter()
            .try_fold(Accumulator::default(), |acc, path| {
                let record = Record::open(path)?;
                self.step(acc, &record)
            })
            .map(Accumulator::finish)
    }

    /// Builds the profile from records already read, in input order
    pub fn build_from_records<I>(&self, records: I) -> Result<ExposureProfile>
    where
        I: IntoIterator,
        I::Item: Borrow<Record>,
    {
        records
            .into_iter()
            .try_fold(Accumulator::default(), |acc, record| {
                self.step(acc, record.borrow())
            })
            .map(Accumulator::finish)
    }

    fn step(&self, acc: Accumulator, record: &Record) -> Result<Accumulator> {
        match record.kind(&self.config) {
            RecordKind::Slice => acc.push(record),
            kind => {
                debug!("Skipping {} record {}", kind, record.file_path.display());
                Ok(acc)
            }
        }
    }
}
