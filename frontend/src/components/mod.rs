//! UI Components for the publish page.
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//! - [`FeatureCards`] - Static ingest / lineage / access cards
//! - [`DatasetsPanel`] - Published datasets placeholder
//!
//! # Feature Components
//! - [`UploadSection`] - File selection, metadata and publish request
//! - [`ShareSection`] - Public link generation

mod hero;
mod upload;
mod features;
mod share;
mod datasets;

pub use hero::*;
pub use upload::*;
pub use features::*;
pub use share::*;
pub use datasets::*;
