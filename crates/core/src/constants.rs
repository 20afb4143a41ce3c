/// Axillary temperature at or above this reading counts as fever (°C).
pub const FEVER_THRESHOLD_CELSIUS: f64 = 37.5;

/// Weight gain above this amount over [`WEIGHT_TREND_WINDOW_DAYS`] marks an
/// increasing trend (grams).
pub const WEIGHT_TREND_GAIN_GRAMS: f64 = 500.0;

/// Window used when classifying the weight trend.
pub const WEIGHT_TREND_WINDOW_DAYS: i64 = 30;

/// Rough month length used for age-in-months arithmetic.
pub const DAYS_PER_MONTH: i64 = 30;

/// Number of top hourly buckets reported as peak feeding hours.
pub const PEAK_HOUR_COUNT: usize = 3;

/// Milestones within this many days of the current age are "upcoming".
pub const MILESTONE_LOOKAHEAD_DAYS: i64 = 7;

/// Default database file name.
pub const DEFAULT_DB_FILENAME: &str = "nestling.db";
