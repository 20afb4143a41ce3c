//! SQLite-backed repositories for health and growth events.

use diesel::prelude::*;

use nestling_core::constants::FEVER_THRESHOLD_CELSIUS;
use nestling_core::health::{
    Diaper, HeadSize, Height, NewDiaper, NewHeadSize, NewHeight, NewSleep, NewTemperature,
    NewWeight, Sleep, Temperature, TemperatureRepositoryTrait, Weight,
};
use nestling_core::utils::TimeWindow;

use super::model::{
    DiaperDB, HeadSizeDB, HeightDB, NewDiaperDB, NewHeadSizeDB, NewHeightDB, NewSleepDB,
    NewTemperatureDB, NewWeightDB, SleepDB, TemperatureDB, WeightDB,
};
use crate::event_repository;
use crate::utils::epoch_secs;

event_repository!(SleepRepository, sleep, SleepDB, NewSleepDB, Sleep, NewSleep);
event_repository!(DiaperRepository, diapers, DiaperDB, NewDiaperDB, Diaper, NewDiaper);
event_repository!(WeightRepository, weights, WeightDB, NewWeightDB, Weight, NewWeight);
event_repository!(HeightRepository, heights, HeightDB, NewHeightDB, Height, NewHeight);
event_repository!(HeadSizeRepository, head_sizes, HeadSizeDB, NewHeadSizeDB, HeadSize, NewHeadSize);
event_repository!(
    TemperatureRepository,
    temperatures,
    TemperatureDB,
    NewTemperatureDB,
    Temperature,
    NewTemperature
);

impl TemperatureRepositoryTrait for TemperatureRepository {
    fn fever_records_in_window(
        &self,
        baby_id: &str,
        window: &TimeWindow,
    ) -> nestling_core::Result<Vec<Temperature>> {
        use crate::schema::temperatures;

        let mut conn = crate::db::get_connection(&self.pool)?;
        let rows = temperatures::table
            .filter(temperatures::baby_id.eq(baby_id))
            .filter(temperatures::event_time.ge(epoch_secs(window.start)))
            .filter(temperatures::event_time.lt(epoch_secs(window.end)))
            .filter(temperatures::celsius.ge(FEVER_THRESHOLD_CELSIUS))
            .order(temperatures::event_time.asc())
            .load::<TemperatureDB>(&mut conn)
            .map_err(crate::errors::StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
