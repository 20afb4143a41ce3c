use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::activity_model::{
    Bath, BathStats, MediaStats, NewBath, NewPhoto, NewPlaytime, NewVideo, Photo, Playtime,
    PlaytimeStats, Video,
};
use super::activity_traits::{PhotoRepositoryTrait, VideoRepositoryTrait};
use crate::errors::{Result, ValidationError};
use crate::events::EventRepositoryTrait;
use crate::utils::time_utils::{local_date, TimeWindow};

/// Service for playtime, baths, and media records.
pub struct ActivityService {
    playtime: Arc<dyn EventRepositoryTrait<Playtime, NewPlaytime>>,
    baths: Arc<dyn EventRepositoryTrait<Bath, NewBath>>,
    photos: Arc<dyn PhotoRepositoryTrait>,
    videos: Arc<dyn VideoRepositoryTrait>,
}

impl ActivityService {
    pub fn new(
        playtime: Arc<dyn EventRepositoryTrait<Playtime, NewPlaytime>>,
        baths: Arc<dyn EventRepositoryTrait<Bath, NewBath>>,
        photos: Arc<dyn PhotoRepositoryTrait>,
        videos: Arc<dyn VideoRepositoryTrait>,
    ) -> Self {
        Self {
            playtime,
            baths,
            photos,
            videos,
        }
    }

    // === Playtime ===

    pub fn add_playtime(&self, new_playtime: NewPlaytime) -> Result<Playtime> {
        self.playtime.insert(new_playtime)
    }

    pub fn playtime_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Playtime>> {
        self.playtime.list_for_baby(baby_id, limit)
    }

    pub fn playtime_stats(&self, baby_id: &str, days: i64) -> Result<PlaytimeStats> {
        let window = TimeWindow::last_days(days);
        let records = self.playtime.list_in_window(baby_id, &window)?;

        let mut daily_minutes: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        let mut minutes_by_kind: BTreeMap<String, i64> = BTreeMap::new();
        for record in &records {
            *daily_minutes.entry(local_date(record.event_time)).or_insert(0) +=
                record.minutes as i64;
            if let Some(kind) = &record.play_kind {
                *minutes_by_kind.entry(kind.clone()).or_insert(0) += record.minutes as i64;
            }
        }

        let total_minutes: i64 = daily_minutes.values().sum();
        let average_daily_minutes = if daily_minutes.is_empty() {
            0.0
        } else {
            total_minutes as f64 / daily_minutes.len() as f64
        };

        Ok(PlaytimeStats {
            daily_minutes,
            minutes_by_kind,
            total_minutes,
            average_daily_minutes,
            record_count: records.len() as i64,
        })
    }

    // === Baths ===

    pub fn add_bath(&self, new_bath: NewBath) -> Result<Bath> {
        self.baths.insert(new_bath)
    }

    pub fn bath_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Bath>> {
        self.baths.list_for_baby(baby_id, limit)
    }

    pub fn bath_stats(&self, baby_id: &str, days: i64) -> Result<BathStats> {
        let window = TimeWindow::last_days(days);
        let records = self.baths.list_in_window(baby_id, &window)?;

        let bath_count = records.len() as i64;
        let baths_per_week = bath_count as f64 / (days.max(1) as f64 / 7.0);
        let average_minutes = if bath_count > 0 {
            records.iter().map(|r| r.minutes as i64).sum::<i64>() as f64 / bath_count as f64
        } else {
            0.0
        };

        let temperatures: Vec<f64> = records.iter().filter_map(|r| r.water_celsius).collect();
        let average_water_celsius = if temperatures.is_empty() {
            None
        } else {
            Some(temperatures.iter().sum::<f64>() / temperatures.len() as f64)
        };

        Ok(BathStats {
            bath_count,
            baths_per_week,
            average_minutes,
            average_water_celsius,
        })
    }

    // === Media ===

    /// Records a photo. The referenced file must exist on disk.
    pub fn add_photo(&self, new_photo: NewPhoto) -> Result<Photo> {
        if !Path::new(&new_photo.file_path).exists() {
            return Err(ValidationError::InvalidInput(format!(
                "photo file does not exist: {}",
                new_photo.file_path
            ))
            .into());
        }
        self.photos.insert(new_photo)
    }

    pub fn photo_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Photo>> {
        self.photos.list_for_baby(baby_id, limit)
    }

    pub fn search_photos(&self, baby_id: &str, keyword: &str) -> Result<Vec<Photo>> {
        self.photos.search_by_caption(baby_id, keyword)
    }

    /// Records a video. The referenced file must exist on disk.
    pub fn add_video(&self, new_video: NewVideo) -> Result<Video> {
        if !Path::new(&new_video.file_path).exists() {
            return Err(ValidationError::InvalidInput(format!(
                "video file does not exist: {}",
                new_video.file_path
            ))
            .into());
        }
        self.videos.insert(new_video)
    }

    pub fn video_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Video>> {
        self.videos.list_for_baby(baby_id, limit)
    }

    pub fn search_videos(&self, baby_id: &str, keyword: &str) -> Result<Vec<Video>> {
        self.videos.search_by_caption(baby_id, keyword)
    }

    pub fn media_stats(&self, baby_id: &str) -> Result<MediaStats> {
        debug!("Building media stats for baby {}", baby_id);
        let photos = self.photos.list_for_baby(baby_id, None)?;
        let video_count = self.videos.list_for_baby(baby_id, None)?.len() as i64;
        let total_video_seconds = self.videos.total_seconds(baby_id)?;

        let mut photos_by_month: BTreeMap<String, i64> = BTreeMap::new();
        for photo in &photos {
            let month = local_date(photo.event_time).format("%Y-%m").to_string();
            *photos_by_month.entry(month).or_insert(0) += 1;
        }

        Ok(MediaStats {
            photo_count: photos.len() as i64,
            photos_by_month,
            video_count,
            total_video_seconds,
            total_video_minutes: total_video_seconds as f64 / 60.0,
        })
    }
}
