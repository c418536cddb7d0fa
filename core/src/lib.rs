pub mod alignment;
pub mod api;
pub mod cli;
pub mod collect;
pub mod error;
pub mod extraction;
pub mod profile;
pub mod record;
pub mod render;
pub mod types;

pub use alignment::align;
pub use api::{AlignedReference, ModulationAnalysis};
pub use cli::report::TextReport;
pub use collect::{collect_attributes, extract_to_csv, CollectionReport};
pub use error::{Result, ScoutmodError};
pub use profile::ProfileBuilder;
pub use record::Record;
pub use render::RenderConfig;
pub use types::*;
