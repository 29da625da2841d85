//! Domain entities and statutory constants for Teilzeit.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default cap on the sum of all reduction sources, in months.
pub const DEFAULT_MAX_REDUCTION_MONTHS: u32 = 12;

/// Minimum allowed part-time/full-time work ratio.
pub const MIN_PARTTIME_FACTOR: f64 = 0.5;

/// Extensions of at most this many months are waived.
pub const EXTENSION_GRACE_MONTHS: f64 = 6.0;

/// Ceiling on total duration, as a multiple of the nominal duration.
pub const DURATION_CAP_MULTIPLIER: f64 = 1.5;

/// Raw reduction sources consumed by the aggregator.
///
/// Values arrive straight from form fields and may be fractional,
/// negative, or non-finite; the aggregator normalizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReductionInput {
    /// Identifier of the selected school degree, if any. Resolved to
    /// `degree_reduction_months` by the caller via a degree catalog;
    /// carried here for display only.
    pub school_degree_id: Option<String>,
    /// Months granted automatically for the chosen school degree.
    pub degree_reduction_months: f64,
    /// Months entered ad hoc by the user.
    pub manual_reduction_months: f64,
    /// Raw (uncapped) sum of qualification-based reduction reasons.
    pub qualification_reduction_months: f64,
    /// Cap on the sum of all reduction sources.
    pub max_total_months: u32,
}

impl Default for ReductionInput {
    fn default() -> Self {
        Self {
            school_degree_id: None,
            degree_reduction_months: 0.0,
            manual_reduction_months: 0.0,
            qualification_reduction_months: 0.0,
            max_total_months: DEFAULT_MAX_REDUCTION_MONTHS,
        }
    }
}

/// Aggregated reduction figures, normalized and capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReductionSummary {
    /// Normalized school-degree reduction in months.
    pub degree: u32,
    /// Normalized manually entered reduction in months.
    pub manual: u32,
    /// Qualification months that fit under the cap after degree and
    /// manual reductions are counted.
    pub qualification: u32,
    /// Original, uncapped qualification sum (for display and warnings).
    pub qualification_raw: u32,
    /// Uncapped sum of all three sources.
    pub total_raw: u32,
    /// Capped total actually used downstream.
    pub total: u32,
    /// Whether the uncapped sum exceeded the cap.
    pub cap_exceeded: bool,
}

/// Rounding mode applied to the final duration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Round to the nearest whole month.
    #[default]
    Round,
    /// Round up to the next whole month.
    Ceil,
    /// Round down to the previous whole month.
    Floor,
}

impl Rounding {
    /// Apply the rounding mode to a value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Round => value.round(),
            Self::Ceil => value.ceil(),
            Self::Floor => value.floor(),
        }
    }

    /// Parse a textual rounding mode, falling back to [`Rounding::Round`]
    /// for unknown values.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "ceil" => Self::Ceil,
            "floor" => Self::Floor,
            _ => Self::Round,
        }
    }
}

/// Inputs to the duration calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DurationInput {
    /// Full-time weekly hours.
    pub weekly_full: f64,
    /// Part-time weekly hours.
    pub weekly_part: f64,
    /// Nominal (regulatory) full-time duration in months.
    pub full_duration_months: f64,
    /// Capped reduction total from the aggregator, in months.
    #[serde(default)]
    pub reduction_months: f64,
    /// Rounding mode for the final duration.
    #[serde(default)]
    pub rounding: Rounding,
    /// Override for the statutory duration floor. Defaults to half the
    /// nominal duration, rounded down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration_months: Option<f64>,
}

/// Reason a plan was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    /// Weekly hours or the derived ratio were unusable.
    InvalidHours,
    /// The part-time ratio fell below the statutory minimum.
    MinFactor,
}

/// Direction of the duration change relative to the effective basis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeltaDirection {
    /// The part-time duration exceeds the basis.
    Longer,
    /// The part-time duration falls short of the basis.
    Shorter,
    /// The part-time duration equals the basis.
    Same,
}

impl DeltaDirection {
    /// Derive the direction from a signed month delta.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Longer
        } else if delta < 0.0 {
            Self::Shorter
        } else {
            Self::Same
        }
    }
}

/// Full derivation of a part-time duration, or a rejection.
///
/// Rejections still carry every field that could be derived, so the
/// consuming UI can show a partial explanation. Consumers must render
/// these figures verbatim and never re-derive them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DurationResult {
    /// Whether the requested part-time schedule is permissible.
    pub allowed: bool,
    /// Rejection reason, present iff `allowed` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RejectionReason>,
    /// Ratio of part-time to full-time weekly hours, when computable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    /// Nominal duration after reductions, floored at the statutory
    /// minimum. Computed even on rejection.
    pub effective_fulltime_months: f64,
    /// Basis divided by the factor, before the grace rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theoretical_duration: Option<f64>,
    /// Extension implied by the theoretical duration, pre-rounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_before_rounding: Option<f64>,
    /// Final part-time duration, a whole number of months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parttime_final_months: Option<f64>,
    /// Final duration minus the effective basis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_months: Option<f64>,
    /// Sign of `delta_months`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_direction: Option<DeltaDirection>,
    /// Final duration minus the unreduced nominal duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_vs_original: Option<f64>,
}

impl DurationResult {
    /// Create a rejection for unusable hour inputs.
    pub fn invalid_hours(effective_fulltime_months: f64, factor: Option<f64>) -> Self {
        Self {
            allowed: false,
            error_code: Some(RejectionReason::InvalidHours),
            factor,
            effective_fulltime_months,
            theoretical_duration: None,
            delta_before_rounding: None,
            parttime_final_months: None,
            delta_months: None,
            delta_direction: None,
            delta_vs_original: None,
        }
    }

    /// Create a rejection for a ratio below the statutory minimum. The
    /// effective basis doubles as the displayed duration.
    pub fn below_min_factor(effective_fulltime_months: f64, factor: f64) -> Self {
        Self {
            allowed: false,
            error_code: Some(RejectionReason::MinFactor),
            factor: Some(factor),
            effective_fulltime_months,
            theoretical_duration: None,
            delta_before_rounding: None,
            parttime_final_months: Some(effective_fulltime_months),
            delta_months: None,
            delta_direction: None,
            delta_vs_original: None,
        }
    }
}
