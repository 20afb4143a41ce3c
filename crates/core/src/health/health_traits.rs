use crate::errors::Result;
use crate::events::EventRepositoryTrait;
use crate::health::health_model::{NewTemperature, Temperature};
use crate::utils::time_utils::TimeWindow;

/// Temperature repository with the fever query on top of the shared event
/// operations.
pub trait TemperatureRepositoryTrait: EventRepositoryTrait<Temperature, NewTemperature> {
    /// Readings at or above the fever threshold, oldest first.
    fn fever_records_in_window(
        &self,
        baby_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Temperature>>;
}
