//! Shared repository abstraction for timestamped event records.
//!
//! Every per-category event table (nursing, sleep, diapers, ...) exposes the
//! same CRUD and windowed-query surface. Services depend on this trait so the
//! storage layer can stamp out one implementation per table.

use crate::errors::Result;
use crate::utils::time_utils::TimeWindow;

/// Repository operations common to all event categories.
///
/// `Rec` is the domain record, `NewRec` its insert form. Read misses return
/// `Ok(None)`; window listings are in chronological order, per-baby listings
/// newest first.
pub trait EventRepositoryTrait<Rec, NewRec>: Send + Sync {
    /// Inserts a record, generating an id when the insert form has none.
    fn insert(&self, new_record: NewRec) -> Result<Rec>;

    fn get(&self, id: &str) -> Result<Option<Rec>>;

    /// Records for one baby, newest first, optionally limited.
    fn list_for_baby(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Rec>>;

    /// Records inside the half-open window, oldest first.
    fn list_in_window(&self, baby_id: &str, window: &TimeWindow) -> Result<Vec<Rec>>;

    fn count_in_window(&self, baby_id: &str, window: &TimeWindow) -> Result<i64>;

    fn latest_for_baby(&self, baby_id: &str) -> Result<Option<Rec>>;

    /// Replaces the stored record; `NotFound` when the id does not exist.
    fn update(&self, record: Rec) -> Result<Rec>;

    fn delete(&self, id: &str) -> Result<usize>;
}
