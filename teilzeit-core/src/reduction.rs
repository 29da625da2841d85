//! Reduction aggregation across degree, manual, and qualification sources.

use crate::domain::{ReductionInput, ReductionSummary};

/// Combine all reduction sources into one capped total.
///
/// Degree and manual reductions are first-class and always counted up to
/// the cap; qualification-based reductions only consume whatever headroom
/// remains. This function never fails; out-of-range inputs are clamped.
pub fn summarize_reduction(input: &ReductionInput) -> ReductionSummary {
    let cap = input.max_total_months;
    let degree = normalize_months(input.degree_reduction_months);
    let manual = normalize_months(input.manual_reduction_months);
    let qualification_raw = normalize_months(input.qualification_reduction_months);

    // Saturating sums: normalization admits values up to u32::MAX, and
    // clamping must never turn into an overflow panic.
    let first_class = degree.saturating_add(manual);
    let remaining = cap - cap.min(first_class);
    let qualification = qualification_raw.min(remaining);

    let total_raw = first_class.saturating_add(qualification_raw);
    let total = cap.min(total_raw);

    ReductionSummary {
        degree,
        manual,
        qualification,
        qualification_raw,
        total_raw,
        total,
        cap_exceeded: total_raw > cap,
    }
}

/// Clamp a raw month value to a non-negative integer. Non-finite values
/// count as zero.
fn normalize_months(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.trunc() as u32
}
