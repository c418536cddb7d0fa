pub mod classify;
pub mod tags;

pub use classify::{classify_description, classify_dicom};
pub use tags::*;
