//! Core business logic module
//!
//! This module contains the ingestion and aggregation components:
//! - `traits` - The `Render` abstraction shared by organizations and members
//! - `validation` - Shape and field validation of parsed JSON records
//! - `registry` - Run-scoped map of organizations by id
//! - `pipeline` - Ordered ingestion stages from parsed input to aggregated registry

pub mod pipeline;
pub mod registry;
pub mod traits;
pub mod validation;

pub use pipeline::{run_pipeline, ReportPipeline};
pub use registry::OrganizationRegistry;
pub use traits::Render;
pub use validation::{valid_member, valid_organization, FieldTag, RawRecord};
