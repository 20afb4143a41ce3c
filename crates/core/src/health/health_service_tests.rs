use chrono::{Duration, Utc};

use super::health_model::Trend;
use super::health_service::HealthService;
use crate::testing::{
    make_diaper, make_sleep, make_temperature, make_weight, MockDiaperRepo, MockHeadRepo,
    MockHeightRepo, MockSleepRepo, MockTemperatureRepo, MockWeightRepo,
};

fn service_with(
    sleep: Vec<crate::health::Sleep>,
    diapers: Vec<crate::health::Diaper>,
    weights: Vec<crate::health::Weight>,
    temperatures: Vec<crate::health::Temperature>,
) -> HealthService {
    HealthService::new(
        MockSleepRepo::new(sleep),
        MockDiaperRepo::new(diapers),
        MockWeightRepo::new(weights),
        MockHeightRepo::empty(),
        MockHeadRepo::empty(),
        MockTemperatureRepo::new(temperatures),
    )
}

#[test]
fn sleep_average_covers_only_days_with_records() {
    let now = Utc::now();
    let sleep = vec![
        make_sleep("s1", "b1", now - Duration::days(1), 120),
        make_sleep("s2", "b1", now - Duration::days(1), 60),
        make_sleep("s3", "b1", now - Duration::days(3), 90),
    ];
    let service = service_with(sleep, vec![], vec![], vec![]);

    let stats = service.sleep_stats("b1", 7).unwrap();
    assert_eq!(stats.record_count, 3);
    assert_eq!(stats.total_minutes, 270);
    assert_eq!(stats.daily_minutes.len(), 2);
    // 270 minutes across two recorded days, not across seven.
    assert_eq!(stats.average_minutes_per_day, 135.0);
}

#[test]
fn sleep_stats_without_records_are_zero() {
    let service = service_with(vec![], vec![], vec![], vec![]);
    let stats = service.sleep_stats("b1", 7).unwrap();
    assert_eq!(stats.total_minutes, 0);
    assert_eq!(stats.average_minutes_per_day, 0.0);
    assert!(stats.daily_minutes.is_empty());
}

#[test]
fn diaper_average_covers_the_requested_days() {
    let now = Utc::now();
    let diapers = vec![
        make_diaper("d1", "b1", now - Duration::hours(2), "1"),
        make_diaper("d2", "b1", now - Duration::hours(5), "2"),
        make_diaper("d3", "b1", now - Duration::days(1), "1"),
        make_diaper("d4", "b1", now - Duration::days(2), "1"),
        make_diaper("d5", "b1", now - Duration::days(2), "3"),
        make_diaper("d6", "b1", now - Duration::days(2), "2"),
    ];
    let service = service_with(vec![], diapers, vec![], vec![]);

    let stats = service.diaper_stats("b1", 3).unwrap();
    assert_eq!(stats.total_count, 6);
    // Average divides by the requested period even on quiet days.
    assert_eq!(stats.daily_average, 2.0);
    let by_type: i64 = stats.daily.values().map(|d| d.total).sum();
    assert_eq!(by_type, 6);
}

#[test]
fn weight_trend_gain_needs_two_records() {
    let now = Utc::now();
    let service = service_with(
        vec![],
        vec![],
        vec![make_weight("w1", "b1", now - Duration::days(5), 4200.0)],
        vec![],
    );
    let trend = service.weight_trend("b1", 30).unwrap();
    assert_eq!(trend.gain_grams, None);
    assert_eq!(trend.latest_grams, Some(4200.0));

    let service = service_with(
        vec![],
        vec![],
        vec![
            make_weight("w1", "b1", now - Duration::days(20), 4200.0),
            make_weight("w2", "b1", now - Duration::days(2), 4300.0),
        ],
        vec![],
    );
    let trend = service.weight_trend("b1", 30).unwrap();
    assert_eq!(trend.gain_grams, Some(100.0));
    assert_eq!(trend.gain_kilograms, Some(0.1));
    assert_eq!(trend.series.len(), 2);
}

#[test]
fn fever_history_returns_only_fever_readings() {
    let now = Utc::now();
    let temperatures = vec![
        make_temperature("t1", "b1", now - Duration::days(2), 36.8),
        make_temperature("t2", "b1", now - Duration::days(1), 37.5),
        make_temperature("t3", "b1", now - Duration::hours(3), 38.6),
    ];
    let service = service_with(vec![], vec![], vec![], temperatures);

    let fevers = service.fever_history("b1", 7).unwrap();
    assert_eq!(fevers.len(), 2);
    assert!(fevers.iter().all(|t| t.celsius >= 37.5));
}

#[test]
fn growth_summary_flags_a_strong_gain_as_increasing() {
    let now = Utc::now();
    let service = service_with(
        vec![],
        vec![],
        vec![
            make_weight("w1", "b1", now - Duration::days(25), 4000.0),
            make_weight("w2", "b1", now - Duration::days(1), 4700.0),
        ],
        vec![],
    );
    let summary = service.growth_summary("b1").unwrap();
    assert_eq!(summary.weight_trend, Trend::Increasing);
    assert_eq!(summary.latest_weight_grams, Some(4700.0));
    assert_eq!(summary.latest_height_cm, None);
}

#[test]
fn growth_summary_flags_weight_loss_as_decreasing() {
    let now = Utc::now();
    let service = service_with(
        vec![],
        vec![],
        vec![
            make_weight("w1", "b1", now - Duration::days(20), 4500.0),
            make_weight("w2", "b1", now - Duration::days(1), 4450.0),
        ],
        vec![],
    );
    let summary = service.growth_summary("b1").unwrap();
    assert_eq!(summary.weight_trend, Trend::Decreasing);
}

#[test]
fn growth_summary_defaults_to_stable() {
    let now = Utc::now();
    // A modest 300 g gain stays within the stable band.
    let service = service_with(
        vec![],
        vec![],
        vec![
            make_weight("w1", "b1", now - Duration::days(20), 4000.0),
            make_weight("w2", "b1", now - Duration::days(1), 4300.0),
        ],
        vec![],
    );
    let summary = service.growth_summary("b1").unwrap();
    assert_eq!(summary.weight_trend, Trend::Stable);
    assert_eq!(summary.height_trend, Trend::Stable);

    // No measurements at all is stable too.
    let empty = service_with(vec![], vec![], vec![], vec![]);
    let summary = empty.growth_summary("b1").unwrap();
    assert_eq!(summary.weight_trend, Trend::Stable);
    assert_eq!(summary.latest_weight_grams, None);
}
