//! Derivation traces and rendering for calculation outcomes.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DurationInput, DurationResult, ReductionSummary, RejectionReason};
use crate::plan::PlanOutcome;

/// One step of a calculation derivation, for "show your work" panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkStep {
    /// Stable step identifier.
    pub id: String,
    /// Value produced by the step.
    pub value: f64,
}

impl WorkStep {
    fn new(id: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            value,
        }
    }
}

/// List the derivation steps of a reduction summary.
pub fn explain_reduction(summary: &ReductionSummary) -> Vec<WorkStep> {
    vec![
        WorkStep::new("degree", summary.degree as f64),
        WorkStep::new("manual", summary.manual as f64),
        WorkStep::new("qualificationRaw", summary.qualification_raw as f64),
        WorkStep::new("qualification", summary.qualification as f64),
        WorkStep::new("totalRaw", summary.total_raw as f64),
        WorkStep::new("total", summary.total as f64),
    ]
}

/// List the derivation steps of a duration calculation. Steps that could
/// not be derived (rejections) are omitted.
pub fn explain_duration(input: &DurationInput, result: &DurationResult) -> Vec<WorkStep> {
    let mut steps = vec![
        WorkStep::new("weeklyFull", input.weekly_full),
        WorkStep::new("weeklyPart", input.weekly_part),
        WorkStep::new("fullDurationMonths", input.full_duration_months),
        WorkStep::new("reductionMonths", input.reduction_months),
    ];
    if let Some(factor) = result.factor {
        steps.push(WorkStep::new("factor", factor));
    }
    steps.push(WorkStep::new(
        "effectiveFulltimeMonths",
        result.effective_fulltime_months,
    ));
    if let Some(theoretical) = result.theoretical_duration {
        steps.push(WorkStep::new("theoreticalDuration", theoretical));
    }
    if let Some(delta) = result.delta_before_rounding {
        steps.push(WorkStep::new("deltaBeforeRounding", delta));
    }
    if let Some(final_months) = result.parttime_final_months {
        steps.push(WorkStep::new("parttimeFinalMonths", final_months));
    }
    if let Some(delta) = result.delta_months {
        steps.push(WorkStep::new("deltaMonths", delta));
    }
    if let Some(delta) = result.delta_vs_original {
        steps.push(WorkStep::new("deltaVsOriginal", delta));
    }
    steps
}

/// Render any serializable payload as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

/// Render a plan outcome as Markdown.
pub fn render_plan_markdown(outcome: &PlanOutcome) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Teilzeit Plan\n");
    append_reduction(&mut output, &outcome.reduction);
    append_duration(&mut output, &outcome.duration);
    output
}

fn append_reduction(output: &mut String, summary: &ReductionSummary) {
    let _ = writeln!(output, "## Reduction");
    let _ = writeln!(output, "- Degree: {} months", summary.degree);
    let _ = writeln!(output, "- Manual: {} months", summary.manual);
    let _ = writeln!(
        output,
        "- Qualification: {} months (raw: {})",
        summary.qualification, summary.qualification_raw
    );
    let _ = writeln!(
        output,
        "- Total: {} months (raw: {})",
        summary.total, summary.total_raw
    );
    if summary.cap_exceeded {
        let _ = writeln!(output, "- Cap exceeded: yes");
    }
    let _ = writeln!(output);
}

fn append_duration(output: &mut String, result: &DurationResult) {
    let _ = writeln!(output, "## Duration");
    match result.error_code {
        None => {
            let _ = writeln!(output, "- Status: allowed");
        }
        Some(RejectionReason::InvalidHours) => {
            let _ = writeln!(output, "- Status: rejected (invalid hours)");
        }
        Some(RejectionReason::MinFactor) => {
            let _ = writeln!(output, "- Status: rejected (below minimum work ratio)");
        }
    }
    if let Some(factor) = result.factor {
        let _ = writeln!(output, "- Factor: {factor:.4}");
    }
    let _ = writeln!(
        output,
        "- Effective full-time basis: {} months",
        result.effective_fulltime_months
    );
    if let Some(theoretical) = result.theoretical_duration {
        let _ = writeln!(output, "- Theoretical duration: {theoretical:.2} months");
    }
    if let Some(final_months) = result.parttime_final_months {
        let _ = writeln!(output, "- Part-time duration: {final_months} months");
    }
    if let Some(delta) = result.delta_vs_original {
        let _ = writeln!(output, "- Change vs. nominal duration: {delta} months");
    }
    let _ = writeln!(output);
}
