//! In-memory mock repositories shared by the service test modules.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::activity::{
    Bath, NewBath, NewPhoto, NewPlaytime, NewVideo, Photo, PhotoRepositoryTrait, Playtime, Video,
    VideoRepositoryTrait,
};
use crate::babies::{Baby, BabyRepositoryTrait, Gender, NewBaby};
use crate::errors::{DatabaseError, Result};
use crate::events::EventRepositoryTrait;
use crate::feeding::{
    FinishSide, Formula, NewFormula, NewNursing, NewPumping, NewSolids, Nursing, Pumping, Solids,
};
use crate::health::{
    Diaper, HeadSize, Height, NewDiaper, NewHeadSize, NewHeight, NewSleep, NewTemperature,
    NewWeight, Sleep, Temperature, TemperatureRepositoryTrait, Weight,
};
use crate::utils::time_utils::TimeWindow;

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

macro_rules! mock_event_repo {
    ($name:ident, $rec:ty, $new:ty, $mk:path) => {
        pub struct $name {
            records: Mutex<Vec<$rec>>,
        }

        impl $name {
            pub fn new(records: Vec<$rec>) -> Arc<Self> {
                Arc::new(Self {
                    records: Mutex::new(records),
                })
            }

            pub fn empty() -> Arc<Self> {
                Self::new(Vec::new())
            }
        }

        impl EventRepositoryTrait<$rec, $new> for $name {
            fn insert(&self, new_record: $new) -> Result<$rec> {
                let record = $mk(new_record);
                self.records.lock().unwrap().push(record.clone());
                Ok(record)
            }

            fn get(&self, id: &str) -> Result<Option<$rec>> {
                Ok(self
                    .records
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|r| r.id == id)
                    .cloned())
            }

            fn list_for_baby(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<$rec>> {
                let mut matches: Vec<$rec> = self
                    .records
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|r| r.baby_id == baby_id)
                    .cloned()
                    .collect();
                matches.sort_by_key(|r| std::cmp::Reverse(r.event_time));
                if let Some(limit) = limit {
                    matches.truncate(limit as usize);
                }
                Ok(matches)
            }

            fn list_in_window(&self, baby_id: &str, window: &TimeWindow) -> Result<Vec<$rec>> {
                let mut matches: Vec<$rec> = self
                    .records
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|r| r.baby_id == baby_id && window.contains(r.event_time))
                    .cloned()
                    .collect();
                matches.sort_by_key(|r| r.event_time);
                Ok(matches)
            }

            fn count_in_window(&self, baby_id: &str, window: &TimeWindow) -> Result<i64> {
                Ok(self.list_in_window(baby_id, window)?.len() as i64)
            }

            fn latest_for_baby(&self, baby_id: &str) -> Result<Option<$rec>> {
                Ok(self.list_for_baby(baby_id, Some(1))?.into_iter().next())
            }

            fn update(&self, record: $rec) -> Result<$rec> {
                let mut records = self.records.lock().unwrap();
                match records.iter_mut().find(|r| r.id == record.id) {
                    Some(slot) => {
                        *slot = record.clone();
                        Ok(record)
                    }
                    None => Err(DatabaseError::NotFound(record.id.clone()).into()),
                }
            }

            fn delete(&self, id: &str) -> Result<usize> {
                let mut records = self.records.lock().unwrap();
                let before = records.len();
                records.retain(|r| r.id != id);
                Ok(before - records.len())
            }
        }
    };
}

fn gen_id(id: Option<String>) -> String {
    id.unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub fn nursing_from_new(new: NewNursing) -> Nursing {
    Nursing {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        type_id: new.type_id,
        finish_side: new.finish_side,
        left_minutes: new.left_minutes,
        right_minutes: new.right_minutes,
        both_minutes: new.both_minutes,
        created_at: Utc::now(),
    }
}

pub fn formula_from_new(new: NewFormula) -> Formula {
    Formula {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        type_id: new.type_id,
        amount_ml: new.amount_ml,
        created_at: Utc::now(),
    }
}

pub fn pumping_from_new(new: NewPumping) -> Pumping {
    Pumping {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        type_id: new.type_id,
        amount_ml: new.amount_ml,
        minutes: new.minutes,
        created_at: Utc::now(),
    }
}

pub fn solids_from_new(new: NewSolids) -> Solids {
    Solids {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        type_id: new.type_id,
        amount: new.amount,
        created_at: Utc::now(),
    }
}

pub fn sleep_from_new(new: NewSleep) -> Sleep {
    Sleep {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        type_id: new.type_id,
        minutes: new.minutes,
        created_at: Utc::now(),
    }
}

pub fn diaper_from_new(new: NewDiaper) -> Diaper {
    Diaper {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        type_id: new.type_id,
        created_at: Utc::now(),
    }
}

pub fn weight_from_new(new: NewWeight) -> Weight {
    Weight {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        grams: new.grams,
        created_at: Utc::now(),
    }
}

pub fn height_from_new(new: NewHeight) -> Height {
    Height {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        centimeters: new.centimeters,
        created_at: Utc::now(),
    }
}

pub fn head_from_new(new: NewHeadSize) -> HeadSize {
    HeadSize {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        centimeters: new.centimeters,
        created_at: Utc::now(),
    }
}

pub fn temperature_from_new(new: NewTemperature) -> Temperature {
    Temperature {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        celsius: new.celsius,
        location: new.location,
        created_at: Utc::now(),
    }
}

pub fn playtime_from_new(new: NewPlaytime) -> Playtime {
    Playtime {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        minutes: new.minutes,
        play_kind: new.play_kind,
        created_at: Utc::now(),
    }
}

pub fn bath_from_new(new: NewBath) -> Bath {
    Bath {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        minutes: new.minutes,
        water_celsius: new.water_celsius,
        created_at: Utc::now(),
    }
}

pub fn photo_from_new(new: NewPhoto) -> Photo {
    Photo {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        file_path: new.file_path,
        caption: new.caption,
        created_at: Utc::now(),
    }
}

pub fn video_from_new(new: NewVideo) -> Video {
    Video {
        id: gen_id(new.id),
        baby_id: new.baby_id,
        event_time: new.event_time,
        note: new.note,
        has_picture: new.has_picture,
        file_path: new.file_path,
        seconds: new.seconds,
        caption: new.caption,
        created_at: Utc::now(),
    }
}

mock_event_repo!(MockNursingRepo, Nursing, NewNursing, nursing_from_new);
mock_event_repo!(MockFormulaRepo, Formula, NewFormula, formula_from_new);
mock_event_repo!(MockPumpingRepo, Pumping, NewPumping, pumping_from_new);
mock_event_repo!(MockSolidsRepo, Solids, NewSolids, solids_from_new);
mock_event_repo!(MockSleepRepo, Sleep, NewSleep, sleep_from_new);
mock_event_repo!(MockDiaperRepo, Diaper, NewDiaper, diaper_from_new);
mock_event_repo!(MockWeightRepo, Weight, NewWeight, weight_from_new);
mock_event_repo!(MockHeightRepo, Height, NewHeight, height_from_new);
mock_event_repo!(MockHeadRepo, HeadSize, NewHeadSize, head_from_new);
mock_event_repo!(MockTemperatureRepo, Temperature, NewTemperature, temperature_from_new);
mock_event_repo!(MockPlaytimeRepo, Playtime, NewPlaytime, playtime_from_new);
mock_event_repo!(MockBathRepo, Bath, NewBath, bath_from_new);
mock_event_repo!(MockPhotoRepo, Photo, NewPhoto, photo_from_new);
mock_event_repo!(MockVideoRepo, Video, NewVideo, video_from_new);

impl TemperatureRepositoryTrait for MockTemperatureRepo {
    fn fever_records_in_window(
        &self,
        baby_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Temperature>> {
        Ok(self
            .list_in_window(baby_id, window)?
            .into_iter()
            .filter(|r| r.is_fever())
            .collect())
    }
}

impl PhotoRepositoryTrait for MockPhotoRepo {
    fn search_by_caption(&self, baby_id: &str, keyword: &str) -> Result<Vec<Photo>> {
        Ok(self
            .list_for_baby(baby_id, None)?
            .into_iter()
            .filter(|r| {
                r.caption
                    .as_deref()
                    .is_some_and(|caption| caption.contains(keyword))
            })
            .collect())
    }
}

impl VideoRepositoryTrait for MockVideoRepo {
    fn search_by_caption(&self, baby_id: &str, keyword: &str) -> Result<Vec<Video>> {
        Ok(self
            .list_for_baby(baby_id, None)?
            .into_iter()
            .filter(|r| {
                r.caption
                    .as_deref()
                    .is_some_and(|caption| caption.contains(keyword))
            })
            .collect())
    }

    fn total_seconds(&self, baby_id: &str) -> Result<i64> {
        Ok(self
            .list_for_baby(baby_id, None)?
            .iter()
            .map(|r| r.seconds as i64)
            .sum())
    }
}

pub struct MockBabyRepo {
    babies: Mutex<Vec<Baby>>,
}

impl MockBabyRepo {
    pub fn new(babies: Vec<Baby>) -> Arc<Self> {
        Arc::new(Self {
            babies: Mutex::new(babies),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Vec::new())
    }
}

impl BabyRepositoryTrait for MockBabyRepo {
    fn create(&self, new_baby: NewBaby) -> Result<Baby> {
        let baby = Baby {
            id: gen_id(new_baby.id),
            name: new_baby.name,
            birthday: new_baby.birthday,
            gender: new_baby.gender,
            due_date: new_baby.due_date,
            picture: new_baby.picture,
            created_at: Utc::now(),
        };
        self.babies.lock().unwrap().push(baby.clone());
        Ok(baby)
    }

    fn get(&self, baby_id: &str) -> Result<Option<Baby>> {
        Ok(self
            .babies
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == baby_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Baby>> {
        Ok(self.babies.lock().unwrap().clone())
    }

    fn update(&self, baby: Baby) -> Result<Baby> {
        let mut babies = self.babies.lock().unwrap();
        match babies.iter_mut().find(|b| b.id == baby.id) {
            Some(slot) => {
                *slot = baby.clone();
                Ok(baby)
            }
            None => Err(DatabaseError::NotFound(baby.id.clone()).into()),
        }
    }

    fn delete(&self, baby_id: &str) -> Result<usize> {
        let mut babies = self.babies.lock().unwrap();
        let before = babies.len();
        babies.retain(|b| b.id != baby_id);
        Ok(before - babies.len())
    }

    fn search_by_name(&self, query: &str) -> Result<Vec<Baby>> {
        Ok(self
            .babies
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.name.contains(query))
            .cloned()
            .collect())
    }

    fn list_by_gender(&self, gender: Gender) -> Result<Vec<Baby>> {
        Ok(self
            .babies
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.gender == gender)
            .cloned()
            .collect())
    }

    fn list_by_age_range(&self, min_days: i64, max_days: i64) -> Result<Vec<Baby>> {
        Ok(self
            .babies
            .lock()
            .unwrap()
            .iter()
            .filter(|b| {
                let age = b.age_in_days();
                age >= min_days && age <= max_days
            })
            .cloned()
            .collect())
    }
}

pub fn make_baby(id: &str, name: &str, birthday: DateTime<Utc>) -> Baby {
    Baby {
        id: id.to_string(),
        name: name.to_string(),
        birthday,
        gender: Gender::Female,
        due_date: None,
        picture: None,
        created_at: Utc::now(),
    }
}

pub fn make_nursing(id: &str, baby_id: &str, event_time: DateTime<Utc>, minutes: i32) -> Nursing {
    Nursing {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        type_id: None,
        finish_side: FinishSide::Both,
        left_minutes: minutes / 2,
        right_minutes: minutes - minutes / 2,
        both_minutes: 0,
        created_at: Utc::now(),
    }
}

pub fn make_formula(id: &str, baby_id: &str, event_time: DateTime<Utc>, amount_ml: f64) -> Formula {
    Formula {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        type_id: None,
        amount_ml,
        created_at: Utc::now(),
    }
}

pub fn make_weight(id: &str, baby_id: &str, event_time: DateTime<Utc>, grams: f64) -> Weight {
    Weight {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        grams,
        created_at: Utc::now(),
    }
}

pub fn make_height(id: &str, baby_id: &str, event_time: DateTime<Utc>, centimeters: f64) -> Height {
    Height {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        centimeters,
        created_at: Utc::now(),
    }
}

pub fn make_temperature(
    id: &str,
    baby_id: &str,
    event_time: DateTime<Utc>,
    celsius: f64,
) -> Temperature {
    Temperature {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        celsius,
        location: None,
        created_at: Utc::now(),
    }
}

pub fn make_sleep(id: &str, baby_id: &str, event_time: DateTime<Utc>, minutes: i32) -> Sleep {
    Sleep {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        type_id: None,
        minutes,
        created_at: Utc::now(),
    }
}

pub fn make_diaper(id: &str, baby_id: &str, event_time: DateTime<Utc>, type_id: &str) -> Diaper {
    Diaper {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        type_id: Some(type_id.to_string()),
        created_at: Utc::now(),
    }
}

pub fn make_playtime(
    id: &str,
    baby_id: &str,
    event_time: DateTime<Utc>,
    minutes: i32,
    play_kind: Option<&str>,
) -> Playtime {
    Playtime {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        minutes,
        play_kind: play_kind.map(|k| k.to_string()),
        created_at: Utc::now(),
    }
}

pub fn make_bath(
    id: &str,
    baby_id: &str,
    event_time: DateTime<Utc>,
    minutes: i32,
    water_celsius: Option<f64>,
) -> Bath {
    Bath {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: false,
        minutes,
        water_celsius,
        created_at: Utc::now(),
    }
}

pub fn make_photo(
    id: &str,
    baby_id: &str,
    event_time: DateTime<Utc>,
    caption: Option<&str>,
) -> Photo {
    Photo {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: true,
        file_path: format!("/media/{}.jpg", id),
        caption: caption.map(|c| c.to_string()),
        created_at: Utc::now(),
    }
}

pub fn make_video(
    id: &str,
    baby_id: &str,
    event_time: DateTime<Utc>,
    seconds: i32,
    caption: Option<&str>,
) -> Video {
    Video {
        id: id.to_string(),
        baby_id: baby_id.to_string(),
        event_time,
        note: None,
        has_picture: true,
        file_path: format!("/media/{}.mp4", id),
        seconds,
        caption: caption.map(|c| c.to_string()),
        created_at: Utc::now(),
    }
}
