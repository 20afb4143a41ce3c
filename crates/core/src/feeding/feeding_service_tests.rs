use chrono::{Duration, NaiveDate, Utc};

use super::feeding_model::{FinishSide, NewFormula};
use super::feeding_service::FeedingService;
use crate::testing::{
    at, make_formula, make_nursing, MockFormulaRepo, MockNursingRepo, MockPumpingRepo,
    MockSolidsRepo,
};

fn service_with(
    nursing: Vec<crate::feeding::Nursing>,
    formula: Vec<crate::feeding::Formula>,
) -> FeedingService {
    FeedingService::new(
        MockNursingRepo::new(nursing),
        MockFormulaRepo::new(formula),
        MockPumpingRepo::empty(),
        MockSolidsRepo::empty(),
    )
}

#[test]
fn nursing_session_lifecycle() {
    let service = service_with(vec![], vec![]);

    let session = service.start_nursing("b1", None, None).unwrap();
    assert_eq!(session.total_minutes(), 0);
    assert_eq!(session.finish_side, FinishSide::Both);

    let finished = service
        .finish_nursing(&session.id, FinishSide::Left, 12, 3, 0, None)
        .unwrap();
    assert_eq!(finished.finish_side, FinishSide::Left);
    assert_eq!(finished.total_minutes(), 15);

    let stored = service.latest_nursing("b1").unwrap().unwrap();
    assert_eq!(stored.total_minutes(), 15);
}

#[test]
fn finishing_an_unknown_session_fails() {
    let service = service_with(vec![], vec![]);
    let result = service.finish_nursing("ghost", FinishSide::Right, 0, 10, 0, None);
    assert!(result.is_err());
}

#[test]
fn daily_stats_are_zero_without_records() {
    let service = service_with(vec![], vec![]);
    let stats = service
        .daily_stats("b1", NaiveDate::from_ymd_opt(2026, 3, 10).unwrap())
        .unwrap();
    assert_eq!(stats.nursing_sessions, 0);
    assert_eq!(stats.formula_sessions, 0);
    assert_eq!(stats.nursing_minutes, 0);
    assert_eq!(stats.formula_ml, 0.0);
    assert_eq!(stats.average_session_minutes, 0.0);
}

#[test]
fn daily_formula_amount_sums_the_day() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let formula = vec![
        make_formula("f1", "b1", at(2026, 3, 10, 9, 0), 80.0),
        make_formula("f2", "b1", at(2026, 3, 10, 15, 0), 110.0),
        // Previous day, outside the window.
        make_formula("f3", "b1", at(2026, 3, 9, 12, 0), 999.0),
    ];
    let service = service_with(vec![], formula);
    assert_eq!(service.daily_formula_ml("b1", day).unwrap(), 190.0);
}

#[test]
fn weekly_summary_divides_by_seven() {
    let end_day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let nursing = vec![
        make_nursing("n1", "b1", at(2026, 3, 10, 9, 0), 14),
        make_nursing("n2", "b1", at(2026, 3, 10, 13, 0), 14),
    ];
    let formula = vec![make_formula("f1", "b1", at(2026, 3, 9, 12, 0), 70.0)];
    let service = service_with(nursing, formula);

    let summary = service.weekly_summary("b1", end_day).unwrap();
    assert_eq!(summary.start, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
    assert_eq!(summary.daily.len(), 7);
    assert_eq!(summary.total_nursing_sessions, 2);
    assert_eq!(summary.total_nursing_minutes, 28);
    assert_eq!(summary.total_formula_ml, 70.0);
    assert_eq!(summary.total_sessions, 3);
    assert!((summary.average_daily_sessions - 3.0 / 7.0).abs() < 1e-9);
    assert!((summary.average_daily_nursing_minutes - 4.0).abs() < 1e-9);
}

#[test]
fn patterns_report_session_counts_and_intervals() {
    let now = Utc::now();
    let nursing = vec![
        make_nursing("n1", "b1", now - Duration::hours(9), 10),
        make_nursing("n2", "b1", now - Duration::hours(6), 10),
        make_nursing("n3", "b1", now - Duration::hours(3), 10),
    ];
    let formula = vec![make_formula("f1", "b1", now - Duration::hours(1), 100.0)];
    let service = service_with(nursing, formula);

    let patterns = service.patterns("b1", 7).unwrap();
    assert_eq!(patterns.period_days, 7);
    assert_eq!(patterns.nursing_sessions, 3);
    assert_eq!(patterns.formula_sessions, 1);
    assert!((patterns.average_nursing_interval_hours - 3.0).abs() < 1e-6);
    assert_eq!(patterns.hourly_nursing.iter().sum::<i64>(), 3);
    assert_eq!(patterns.hourly_formula.iter().sum::<i64>(), 1);
    assert!(!patterns.peak_nursing_hours.is_empty());
}

#[test]
fn patterns_are_empty_without_records() {
    let service = service_with(vec![], vec![]);
    let patterns = service.patterns("b1", 7).unwrap();
    assert_eq!(patterns.nursing_sessions, 0);
    assert_eq!(patterns.average_nursing_interval_hours, 0.0);
    assert!(patterns.peak_nursing_hours.is_empty());
    assert!(patterns.peak_formula_hours.is_empty());
}

#[test]
fn pumping_and_solids_are_recorded() {
    let service = FeedingService::new(
        MockNursingRepo::empty(),
        MockFormulaRepo::empty(),
        MockPumpingRepo::empty(),
        MockSolidsRepo::empty(),
    );

    service
        .add_pumping(crate::feeding::NewPumping {
            id: None,
            baby_id: "b1".to_string(),
            event_time: Utc::now(),
            note: None,
            has_picture: false,
            type_id: None,
            amount_ml: 60.0,
            minutes: 12,
        })
        .unwrap();
    assert_eq!(service.pumping_records("b1", None).unwrap().len(), 1);

    service
        .add_solids(crate::feeding::NewSolids {
            id: None,
            baby_id: "b1".to_string(),
            event_time: Utc::now(),
            note: Some("carrot puree".to_string()),
            has_picture: false,
            type_id: None,
            amount: 40.0,
        })
        .unwrap();
    assert_eq!(service.solids_records("b1", None).unwrap().len(), 1);
}

#[test]
fn formula_can_be_updated_and_deleted() {
    let service = service_with(vec![], vec![]);
    let record = service
        .add_formula(NewFormula {
            id: Some("f1".to_string()),
            baby_id: "b1".to_string(),
            event_time: Utc::now(),
            note: None,
            has_picture: false,
            type_id: None,
            amount_ml: 80.0,
        })
        .unwrap();

    let mut changed = record.clone();
    changed.amount_ml = 95.0;
    assert_eq!(service.update_formula(changed).unwrap().amount_ml, 95.0);
    assert_eq!(service.delete_formula("f1").unwrap(), 1);
    assert!(service.formula_records("b1", None).unwrap().is_empty());
}
