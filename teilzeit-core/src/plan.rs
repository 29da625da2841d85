//! Composition adapter from raw form values to a calculated plan.
//!
//! The calculator never calls the aggregator itself; this adapter wires
//! the two together the way the consuming form does.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{sum_qualification_months, DegreeCatalog, QualificationReason};
use crate::domain::{
    DurationInput, DurationResult, ReductionInput, ReductionSummary, Rounding,
    DEFAULT_MAX_REDUCTION_MONTHS,
};
use crate::duration::calculate_duration;
use crate::error::{Result, TeilzeitError};
use crate::reduction::summarize_reduction;

/// Raw, optional form values for a full plan calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRequest {
    /// Full-time weekly hours.
    pub weekly_full: Option<f64>,
    /// Part-time weekly hours.
    pub weekly_part: Option<f64>,
    /// Nominal full-time duration in months.
    pub full_duration_months: Option<f64>,
    /// Selected school degree identifier.
    pub school_degree_id: Option<String>,
    /// Manually entered reduction in months.
    pub manual_reduction_months: Option<f64>,
    /// Selected qualification-based reduction reasons.
    pub qualification_reasons: Vec<QualificationReason>,
    /// Rounding mode for the final duration.
    pub rounding: Option<Rounding>,
    /// Override for the reduction cap.
    pub max_reduction_months: Option<u32>,
    /// Override for the statutory duration floor.
    pub min_duration_months: Option<f64>,
}

/// Aggregated reduction plus the calculated duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanOutcome {
    /// Aggregated reduction figures.
    pub reduction: ReductionSummary,
    /// Calculated part-time duration.
    pub duration: DurationResult,
}

/// Default missing form values, resolve the degree identifier through the
/// catalog, then run aggregator and calculator in sequence.
///
/// Fails only on adapter-level faults (an identifier the catalog does not
/// know); domain rejections are reported on the returned outcome.
pub fn plan<C: DegreeCatalog>(catalog: &C, request: &PlanRequest) -> Result<PlanOutcome> {
    let degree_id = request
        .school_degree_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let degree_reduction_months = match degree_id {
        Some(id) => catalog
            .reduction_months(id)
            .ok_or_else(|| TeilzeitError::UnknownDegree(id.to_string()))? as f64,
        None => 0.0,
    };

    let reduction = summarize_reduction(&ReductionInput {
        school_degree_id: degree_id.map(str::to_string),
        degree_reduction_months,
        manual_reduction_months: request.manual_reduction_months.unwrap_or(0.0),
        qualification_reduction_months: sum_qualification_months(&request.qualification_reasons),
        max_total_months: request
            .max_reduction_months
            .unwrap_or(DEFAULT_MAX_REDUCTION_MONTHS),
    });

    let duration = calculate_duration(&DurationInput {
        weekly_full: request.weekly_full.unwrap_or(0.0),
        weekly_part: request.weekly_part.unwrap_or(0.0),
        full_duration_months: request.full_duration_months.unwrap_or(0.0),
        reduction_months: reduction.total as f64,
        rounding: request.rounding.unwrap_or_default(),
        min_duration_months: request.min_duration_months,
    });

    Ok(PlanOutcome {
        reduction,
        duration,
    })
}
