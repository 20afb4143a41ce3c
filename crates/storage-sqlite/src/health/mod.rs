mod model;
mod repository;

pub use model::{
    DiaperDB, HeadSizeDB, HeightDB, NewDiaperDB, NewHeadSizeDB, NewHeightDB, NewSleepDB,
    NewTemperatureDB, NewWeightDB, SleepDB, TemperatureDB, WeightDB,
};
pub use repository::{
    DiaperRepository, HeadSizeRepository, HeightRepository, SleepRepository,
    TemperatureRepository, WeightRepository,
};
