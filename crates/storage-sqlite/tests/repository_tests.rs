mod common;

use chrono::{Duration, Utc};

use nestling_core::activity::{NewPhoto, NewVideo, PhotoRepositoryTrait, VideoRepositoryTrait};
use nestling_core::babies::{BabyRepositoryTrait, Gender};
use nestling_core::errors::{DatabaseError, Error};
use nestling_core::events::EventRepositoryTrait;
use nestling_core::feeding::{FinishSide, NewNursing};
use nestling_core::health::{NewTemperature, TemperatureRepositoryTrait};
use nestling_core::utils::TimeWindow;

use nestling_storage_sqlite::activity::{PhotoRepository, VideoRepository};
use nestling_storage_sqlite::babies::BabyRepository;
use nestling_storage_sqlite::feeding::NursingRepository;
use nestling_storage_sqlite::health::TemperatureRepository;

use common::{at, new_baby, seed_baby, test_pool};

fn nursing(baby_id: &str, time: chrono::DateTime<chrono::Utc>, minutes: i32) -> NewNursing {
    NewNursing {
        id: None,
        baby_id: baby_id.to_string(),
        event_time: time,
        note: None,
        has_picture: false,
        type_id: None,
        finish_side: FinishSide::Left,
        left_minutes: minutes,
        right_minutes: 0,
        both_minutes: 0,
    }
}

#[test]
fn baby_crud_round_trips() {
    let (_dir, pool) = test_pool();
    let repo = BabyRepository::new(pool.clone());

    let created = repo.create(new_baby("Nora", 30)).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Nora");

    let fetched = repo.get(&created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(repo.get("missing").unwrap().is_none());

    let mut renamed = fetched;
    renamed.name = "Nora Lee".to_string();
    let updated = repo.update(renamed).unwrap();
    assert_eq!(updated.name, "Nora Lee");

    assert_eq!(repo.delete(&created.id).unwrap(), 1);
    assert!(repo.get(&created.id).unwrap().is_none());
}

#[test]
fn updating_a_missing_baby_reports_not_found() {
    let (_dir, pool) = test_pool();
    let repo = BabyRepository::new(pool.clone());

    let mut ghost = seed_baby(&pool, "Ghost", 10);
    repo.delete(&ghost.id).unwrap();
    ghost.name = "Still here?".to_string();

    match repo.update(ghost) {
        Err(Error::Database(DatabaseError::NotFound(_))) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|b| b.name)),
    }
}

#[test]
fn baby_filters_search_the_expected_rows() {
    let (_dir, pool) = test_pool();
    let repo = BabyRepository::new(pool.clone());

    let nora = seed_baby(&pool, "Nora", 40);
    let mut milo = new_baby("Milo", 400);
    milo.gender = Gender::Male;
    let milo = repo.create(milo).unwrap();

    let hits = repo.search_by_name("or").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, nora.id);

    let boys = repo.list_by_gender(Gender::Male).unwrap();
    assert_eq!(boys.len(), 1);
    assert_eq!(boys[0].id, milo.id);

    let infants = repo.list_by_age_range(0, 180).unwrap();
    assert_eq!(infants.len(), 1);
    assert_eq!(infants[0].id, nora.id);
}

#[test]
fn event_inserts_get_generated_ids() {
    let (_dir, pool) = test_pool();
    let baby = seed_baby(&pool, "Nora", 30);
    let repo = NursingRepository::new(pool.clone());

    let session = repo.insert(nursing(&baby.id, Utc::now(), 12)).unwrap();
    assert!(!session.id.is_empty());
    assert_eq!(session.left_minutes, 12);
    assert_eq!(session.finish_side, FinishSide::Left);

    let fetched = repo.get(&session.id).unwrap().unwrap();
    assert_eq!(fetched, session);
}

#[test]
fn listing_orders_newest_first_and_honors_the_limit() {
    let (_dir, pool) = test_pool();
    let baby = seed_baby(&pool, "Nora", 30);
    let repo = NursingRepository::new(pool.clone());

    for (day, minutes) in [(1, 5), (2, 10), (3, 15)] {
        repo.insert(nursing(&baby.id, at(2026, 3, day, 9, 0), minutes)).unwrap();
    }

    let all = repo.list_for_baby(&baby.id, None).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].left_minutes, 15);
    assert_eq!(all[2].left_minutes, 5);

    let latest_two = repo.list_for_baby(&baby.id, Some(2)).unwrap();
    assert_eq!(latest_two.len(), 2);
    assert_eq!(latest_two[0].left_minutes, 15);
}

#[test]
fn window_queries_are_half_open() {
    let (_dir, pool) = test_pool();
    let baby = seed_baby(&pool, "Nora", 30);
    let repo = NursingRepository::new(pool.clone());

    let start = at(2026, 3, 2, 0, 0);
    let end = at(2026, 3, 3, 0, 0);
    repo.insert(nursing(&baby.id, start - Duration::seconds(1), 1)).unwrap();
    repo.insert(nursing(&baby.id, start, 2)).unwrap();
    repo.insert(nursing(&baby.id, end - Duration::seconds(1), 3)).unwrap();
    repo.insert(nursing(&baby.id, end, 4)).unwrap();

    let window = TimeWindow::new(start, end);
    let hits = repo.list_in_window(&baby.id, &window).unwrap();
    assert_eq!(hits.len(), 2);
    // Ascending within the window.
    assert_eq!(hits[0].left_minutes, 2);
    assert_eq!(hits[1].left_minutes, 3);
    assert_eq!(repo.count_in_window(&baby.id, &window).unwrap(), 2);

    let latest = repo.latest_for_baby(&baby.id).unwrap().unwrap();
    assert_eq!(latest.left_minutes, 4);
}

#[test]
fn event_update_and_delete_behave_like_the_baby_repo() {
    let (_dir, pool) = test_pool();
    let baby = seed_baby(&pool, "Nora", 30);
    let repo = NursingRepository::new(pool.clone());

    let mut session = repo.insert(nursing(&baby.id, Utc::now(), 8)).unwrap();
    session.right_minutes = 6;
    session.finish_side = FinishSide::Right;
    let updated = repo.update(session.clone()).unwrap();
    assert_eq!(updated.right_minutes, 6);
    assert_eq!(updated.finish_side, FinishSide::Right);

    assert_eq!(repo.delete(&session.id).unwrap(), 1);
    match repo.update(session) {
        Err(Error::Database(DatabaseError::NotFound(_))) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|s| s.id)),
    }
}

#[test]
fn deleting_a_baby_cascades_to_its_events() {
    let (_dir, pool) = test_pool();
    let baby = seed_baby(&pool, "Nora", 30);
    let babies = BabyRepository::new(pool.clone());
    let sessions = NursingRepository::new(pool.clone());

    let session = sessions.insert(nursing(&baby.id, Utc::now(), 10)).unwrap();
    babies.delete(&baby.id).unwrap();

    assert!(sessions.get(&session.id).unwrap().is_none());
    assert!(sessions.list_for_baby(&baby.id, None).unwrap().is_empty());
}

#[test]
fn lookup_seeding_is_idempotent() {
    use nestling_core::lookup::LookupRepositoryTrait;
    use nestling_storage_sqlite::lookup::{seed_lookups, LookupRepository};

    let (_dir, pool) = test_pool();
    let repo = LookupRepository::new(pool.clone());

    seed_lookups(&repo).unwrap();
    seed_lookups(&repo).unwrap();

    assert_eq!(repo.list_feed_types().unwrap().len(), 8);
    assert_eq!(repo.list_sleep_types().unwrap().len(), 3);
    assert_eq!(repo.list_diaper_types().unwrap().len(), 4);

    let wet = repo.get_diaper_type("1").unwrap().unwrap();
    assert_eq!(wet.name, "Wet");
    assert!(repo.get_diaper_type("99").unwrap().is_none());
}

#[test]
fn fever_query_applies_the_threshold_inclusively() {
    let (_dir, pool) = test_pool();
    let baby = seed_baby(&pool, "Nora", 30);
    let repo = TemperatureRepository::new(pool.clone());

    for (day, celsius) in [(1, 36.8), (2, 37.5), (3, 38.4)] {
        repo.insert(NewTemperature {
            id: None,
            baby_id: baby.id.clone(),
            event_time: at(2026, 4, day, 12, 0),
            note: None,
            has_picture: false,
            celsius,
            location: Some("armpit".to_string()),
        })
        .unwrap();
    }

    let window = TimeWindow::new(at(2026, 4, 1, 0, 0), at(2026, 4, 4, 0, 0));
    let fevers = repo.fever_records_in_window(&baby.id, &window).unwrap();
    assert_eq!(fevers.len(), 2);
    assert_eq!(fevers[0].celsius, 37.5);
    assert_eq!(fevers[1].celsius, 38.4);
}

#[test]
fn caption_search_and_duration_total_cover_the_media_tables() {
    let (_dir, pool) = test_pool();
    let baby = seed_baby(&pool, "Nora", 30);
    let photos = PhotoRepository::new(pool.clone());
    let videos = VideoRepository::new(pool.clone());

    for (day, caption) in [(1, "First bath"), (2, "Asleep in the park"), (3, "Bath time again")] {
        photos
            .insert(NewPhoto {
                id: None,
                baby_id: baby.id.clone(),
                event_time: at(2026, 5, day, 10, 0),
                note: None,
                has_picture: true,
                file_path: format!("/media/photo-{day}.jpg"),
                caption: Some(caption.to_string()),
            })
            .unwrap();
    }
    for (day, seconds) in [(1, 45), (2, 75)] {
        videos
            .insert(NewVideo {
                id: None,
                baby_id: baby.id.clone(),
                event_time: at(2026, 5, day, 11, 0),
                note: None,
                has_picture: true,
                file_path: format!("/media/video-{day}.mp4"),
                seconds,
                caption: None,
            })
            .unwrap();
    }

    let baths = photos.search_by_caption(&baby.id, "ath").unwrap();
    assert_eq!(baths.len(), 2);
    // Newest first.
    assert_eq!(baths[0].caption.as_deref(), Some("Bath time again"));

    assert!(videos.search_by_caption(&baby.id, "bath").unwrap().is_empty());
    assert_eq!(videos.total_seconds(&baby.id).unwrap(), 120);
    assert_eq!(videos.total_seconds("someone-else").unwrap(), 0);
}
