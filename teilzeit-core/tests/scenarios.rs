//! End-to-end scenarios through the public engine API.

use teilzeit_core::{
    calculate_duration, plan, summarize_reduction, DeltaDirection, DurationInput, PlanRequest,
    QualificationReason, ReductionInput, RejectionReason, Rounding, StandardDegreeCatalog,
};

fn duration_input(weekly_full: f64, weekly_part: f64, full: f64, reduction: f64) -> DurationInput {
    DurationInput {
        weekly_full,
        weekly_part,
        full_duration_months: full,
        reduction_months: reduction,
        rounding: Rounding::Round,
        min_duration_months: None,
    }
}

#[test]
fn reduced_thirty_hour_week_stretches_to_forty_months() {
    let result = calculate_duration(&duration_input(40.0, 30.0, 36.0, 6.0));
    assert!(result.allowed);
    assert_eq!(result.effective_fulltime_months, 30.0);
    assert_eq!(result.parttime_final_months, Some(40.0));
    assert_eq!(result.delta_months, Some(10.0));
    assert_eq!(result.delta_direction, Some(DeltaDirection::Longer));
}

#[test]
fn almost_fulltime_week_keeps_nominal_duration() {
    let result = calculate_duration(&duration_input(40.0, 38.0, 36.0, 0.0));
    assert_eq!(result.parttime_final_months, Some(36.0));
    assert_eq!(result.delta_months, Some(0.0));
    assert_eq!(result.delta_direction, Some(DeltaDirection::Same));
}

#[test]
fn half_time_week_hits_the_duration_cap() {
    let result = calculate_duration(&duration_input(40.0, 20.0, 24.0, 0.0));
    assert!(result.allowed);
    assert_eq!(result.theoretical_duration, Some(48.0));
    assert_eq!(result.parttime_final_months, Some(36.0));
}

#[test]
fn oversized_reduction_lands_on_the_statutory_floor() {
    let result = calculate_duration(&duration_input(40.0, 30.0, 36.0, 30.0));
    assert_eq!(result.effective_fulltime_months, 18.0);
    assert_eq!(result.parttime_final_months, Some(18.0));
}

#[test]
fn fifteen_hour_week_is_rejected() {
    let result = calculate_duration(&duration_input(40.0, 15.0, 36.0, 0.0));
    assert!(!result.allowed);
    assert_eq!(result.error_code, Some(RejectionReason::MinFactor));
}

#[test]
fn degree_and_manual_reductions_squeeze_out_qualifications() {
    let summary = summarize_reduction(&ReductionInput {
        degree_reduction_months: 6.0,
        manual_reduction_months: 3.0,
        qualification_reduction_months: 10.0,
        ..ReductionInput::default()
    });
    assert_eq!(summary.qualification, 3);
    assert_eq!(summary.total, 12);
    assert_eq!(summary.total_raw, 19);
    assert!(summary.cap_exceeded);
}

#[test]
fn full_plan_round_trips_through_the_adapter() {
    let outcome = plan(
        &StandardDegreeCatalog::new(),
        &PlanRequest {
            weekly_full: Some(40.0),
            weekly_part: Some(30.0),
            full_duration_months: Some(36.0),
            school_degree_id: Some("mittlerer-abschluss".to_string()),
            manual_reduction_months: Some(3.0),
            qualification_reasons: vec![QualificationReason {
                id: "prior-training".to_string(),
                months: 10.0,
            }],
            ..PlanRequest::default()
        },
    )
    .expect("plan");

    assert_eq!(outcome.reduction.total, 12);
    assert!(outcome.reduction.cap_exceeded);
    // 36 - 12 = 24 months basis at 0.75 stretches to 32 months.
    assert_eq!(outcome.duration.effective_fulltime_months, 24.0);
    assert_eq!(outcome.duration.parttime_final_months, Some(32.0));
}

#[test]
fn plan_requests_deserialize_from_form_shaped_json() {
    let request: PlanRequest = serde_json::from_str(
        r#"{
            "weeklyFull": 40,
            "weeklyPart": 20,
            "fullDurationMonths": 24,
            "qualificationReasons": [{"id": "prior-training", "months": 3}]
        }"#,
    )
    .expect("deserialize");

    let outcome = plan(&StandardDegreeCatalog::new(), &request).expect("plan");
    assert_eq!(outcome.reduction.total, 3);
    // 21-month basis doubled is 42, capped at 36.
    assert_eq!(outcome.duration.parttime_final_months, Some(36.0));
}
