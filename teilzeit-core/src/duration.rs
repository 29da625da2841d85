//! Part-time duration calculation.

use crate::domain::{
    DeltaDirection, DurationInput, DurationResult, DURATION_CAP_MULTIPLIER,
    EXTENSION_GRACE_MONTHS, MIN_PARTTIME_FACTOR,
};

/// Compute the final part-time duration from hours, nominal duration, and
/// an aggregated reduction.
///
/// All intermediate math stays in full floating-point precision; only the
/// final duration is rounded, using the requested mode. Rejections are
/// reported on the result, never raised.
pub fn calculate_duration(input: &DurationInput) -> DurationResult {
    let full = input.full_duration_months;
    let reduction = if input.reduction_months.is_finite() {
        input.reduction_months.max(0.0)
    } else {
        0.0
    };

    // The basis is computed even for rejections so the UI can show a
    // partial explanation.
    let min_duration_floor = input
        .min_duration_months
        .unwrap_or_else(|| (full / 2.0).floor())
        .max(0.0);
    let base_after_reduction = (full - reduction).max(0.0);
    let effective_fulltime_months = base_after_reduction.max(min_duration_floor);

    if !is_usable_hours(input.weekly_full) || !is_usable_hours(input.weekly_part) {
        return DurationResult::invalid_hours(effective_fulltime_months, None);
    }

    let factor = input.weekly_part / input.weekly_full;
    if !factor.is_finite() || factor <= 0.0 {
        return DurationResult::invalid_hours(effective_fulltime_months, None);
    }
    if factor < MIN_PARTTIME_FACTOR {
        return DurationResult::below_min_factor(effective_fulltime_months, factor);
    }

    let theoretical_duration = effective_fulltime_months / factor;
    let theoretical_delta = theoretical_duration - effective_fulltime_months;

    // Extensions within the grace period are waived.
    let unclamped = if theoretical_delta <= EXTENSION_GRACE_MONTHS {
        effective_fulltime_months
    } else {
        theoretical_duration
    };

    let max_duration = full * DURATION_CAP_MULTIPLIER;
    let capped = if unclamped > max_duration {
        max_duration
    } else {
        unclamped
    };

    let parttime_final_months = input.rounding.apply(capped);
    let delta_months = parttime_final_months - effective_fulltime_months;

    DurationResult {
        allowed: true,
        error_code: None,
        factor: Some(factor),
        effective_fulltime_months,
        theoretical_duration: Some(theoretical_duration),
        delta_before_rounding: Some(theoretical_delta),
        parttime_final_months: Some(parttime_final_months),
        delta_months: Some(delta_months),
        delta_direction: Some(DeltaDirection::from_delta(delta_months)),
        delta_vs_original: Some(parttime_final_months - full),
    }
}

fn is_usable_hours(hours: f64) -> bool {
    hours.is_finite() && hours > 0.0
}
