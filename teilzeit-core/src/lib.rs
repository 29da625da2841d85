#![deny(missing_docs)]
//! Teilzeit core library.
//!
//! This crate contains the duration/reduction calculation engine for
//! part-time apprenticeships, plus the collaborator interfaces and
//! reporting helpers that surround it. Both engine entry points are pure
//! functions over plain data; they never touch I/O, the clock, or any
//! shared state.

pub mod catalog;
pub mod domain;
pub mod duration;
pub mod error;
pub mod plan;
pub mod reduction;
pub mod report;

pub use catalog::{
    sum_qualification_months, DegreeCatalog, DegreeEntry, QualificationReason,
    StandardDegreeCatalog,
};
pub use domain::{
    DeltaDirection, DurationInput, DurationResult, ReductionInput, ReductionSummary,
    RejectionReason, Rounding, DEFAULT_MAX_REDUCTION_MONTHS, DURATION_CAP_MULTIPLIER,
    EXTENSION_GRACE_MONTHS, MIN_PARTTIME_FACTOR,
};
pub use duration::calculate_duration;
pub use error::{Result, TeilzeitError};
pub use plan::{plan, PlanOutcome, PlanRequest};
pub use reduction::summarize_reduction;
pub use report::{
    explain_duration, explain_reduction, render_json, render_plan_markdown, WorkStep,
};
