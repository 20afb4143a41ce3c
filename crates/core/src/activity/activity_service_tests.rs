use chrono::{Duration, Utc};

use super::activity_model::{NewPhoto, NewVideo};
use super::activity_service::ActivityService;
use crate::testing::{
    make_bath, make_photo, make_playtime, make_video, MockBathRepo, MockPhotoRepo,
    MockPlaytimeRepo, MockVideoRepo,
};

fn service_with(
    playtime: Vec<crate::activity::Playtime>,
    baths: Vec<crate::activity::Bath>,
    photos: Vec<crate::activity::Photo>,
    videos: Vec<crate::activity::Video>,
) -> ActivityService {
    ActivityService::new(
        MockPlaytimeRepo::new(playtime),
        MockBathRepo::new(baths),
        MockPhotoRepo::new(photos),
        MockVideoRepo::new(videos),
    )
}

#[test]
fn playtime_stats_group_by_day_and_kind() {
    let now = Utc::now();
    let playtime = vec![
        make_playtime("p1", "b1", now - Duration::days(1), 30, Some("tummy time")),
        make_playtime("p2", "b1", now - Duration::days(1), 20, Some("reading")),
        make_playtime("p3", "b1", now - Duration::days(3), 40, Some("tummy time")),
    ];
    let service = service_with(playtime, vec![], vec![], vec![]);

    let stats = service.playtime_stats("b1", 7).unwrap();
    assert_eq!(stats.record_count, 3);
    assert_eq!(stats.total_minutes, 90);
    assert_eq!(stats.daily_minutes.len(), 2);
    // Two recorded days, so 90 / 2.
    assert_eq!(stats.average_daily_minutes, 45.0);
    assert_eq!(stats.minutes_by_kind.get("tummy time"), Some(&70));
    assert_eq!(stats.minutes_by_kind.get("reading"), Some(&20));
}

#[test]
fn bath_stats_normalize_to_weeks() {
    let now = Utc::now();
    let baths = vec![
        make_bath("bt1", "b1", now - Duration::days(2), 12, Some(37.0)),
        make_bath("bt2", "b1", now - Duration::days(9), 8, None),
    ];
    let service = service_with(vec![], baths, vec![], vec![]);

    let stats = service.bath_stats("b1", 14).unwrap();
    assert_eq!(stats.bath_count, 2);
    assert_eq!(stats.baths_per_week, 1.0);
    assert_eq!(stats.average_minutes, 10.0);
    // Missing water temperatures are skipped, not counted as zero.
    assert_eq!(stats.average_water_celsius, Some(37.0));
}

#[test]
fn adding_media_requires_the_file_to_exist() {
    let service = service_with(vec![], vec![], vec![], vec![]);

    let missing = service.add_photo(NewPhoto {
        id: None,
        baby_id: "b1".to_string(),
        event_time: Utc::now(),
        note: None,
        has_picture: true,
        file_path: "/nonexistent/first-smile.jpg".to_string(),
        caption: None,
    });
    assert!(missing.is_err());
    assert!(service.photo_records("b1", None).unwrap().is_empty());

    let file = tempfile::NamedTempFile::new().unwrap();
    let added = service
        .add_photo(NewPhoto {
            id: None,
            baby_id: "b1".to_string(),
            event_time: Utc::now(),
            note: None,
            has_picture: true,
            file_path: file.path().to_string_lossy().into_owned(),
            caption: Some("first smile".to_string()),
        })
        .unwrap();
    assert_eq!(added.caption.as_deref(), Some("first smile"));

    let video = service.add_video(NewVideo {
        id: None,
        baby_id: "b1".to_string(),
        event_time: Utc::now(),
        note: None,
        has_picture: true,
        file_path: "/nonexistent/rolling-over.mp4".to_string(),
        seconds: 30,
        caption: None,
    });
    assert!(video.is_err());
}

#[test]
fn caption_search_matches_substrings() {
    let now = Utc::now();
    let photos = vec![
        make_photo("ph1", "b1", now - Duration::days(1), Some("first bath")),
        make_photo("ph2", "b1", now - Duration::days(2), Some("asleep in the car")),
        make_photo("ph3", "b1", now - Duration::days(3), None),
    ];
    let videos = vec![make_video("v1", "b1", now, 45, Some("bath time splashing"))];
    let service = service_with(vec![], vec![], photos, videos);

    assert_eq!(service.search_photos("b1", "bath").unwrap().len(), 1);
    assert_eq!(service.search_photos("b1", "nothing").unwrap().len(), 0);
    assert_eq!(service.search_videos("b1", "bath").unwrap().len(), 1);
}

#[test]
fn media_stats_total_the_library() {
    let now = Utc::now();
    let photos = vec![
        make_photo("ph1", "b1", now, None),
        make_photo("ph2", "b1", now - Duration::days(40), None),
    ];
    let videos = vec![
        make_video("v1", "b1", now, 90, None),
        make_video("v2", "b1", now - Duration::days(10), 30, None),
    ];
    let service = service_with(vec![], vec![], photos, videos);

    let stats = service.media_stats("b1").unwrap();
    assert_eq!(stats.photo_count, 2);
    assert_eq!(stats.photos_by_month.len(), 2);
    assert_eq!(stats.video_count, 2);
    assert_eq!(stats.total_video_seconds, 120);
    assert_eq!(stats.total_video_minutes, 2.0);
}
