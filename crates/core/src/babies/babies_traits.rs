use crate::babies::babies_model::{
    Baby, BabyDashboard, BabyStatistics, BabyUpdate, Gender, NewBaby,
};
use crate::errors::Result;

/// Trait for baby repository operations
pub trait BabyRepositoryTrait: Send + Sync {
    fn create(&self, new_baby: NewBaby) -> Result<Baby>;
    fn get(&self, baby_id: &str) -> Result<Option<Baby>>;
    fn list(&self) -> Result<Vec<Baby>>;
    fn update(&self, baby: Baby) -> Result<Baby>;
    /// Deletes the baby and, through the schema's cascade rules, every event
    /// recorded for it.
    fn delete(&self, baby_id: &str) -> Result<usize>;
    fn search_by_name(&self, query: &str) -> Result<Vec<Baby>>;
    fn list_by_gender(&self, gender: Gender) -> Result<Vec<Baby>>;
    fn list_by_age_range(&self, min_days: i64, max_days: i64) -> Result<Vec<Baby>>;
}

/// Trait for baby service operations
pub trait BabyServiceTrait: Send + Sync {
    fn create_baby(&self, new_baby: NewBaby) -> Result<Baby>;
    fn get_baby(&self, baby_id: &str) -> Result<Option<Baby>>;
    fn list_babies(&self) -> Result<Vec<Baby>>;
    fn update_baby(&self, update: BabyUpdate) -> Result<Baby>;
    fn delete_baby(&self, baby_id: &str) -> Result<usize>;
    fn search_babies(&self, query: &str) -> Result<Vec<Baby>>;
    fn babies_by_gender(&self, gender: Gender) -> Result<Vec<Baby>>;
    fn babies_by_age_range(&self, min_days: i64, max_days: i64) -> Result<Vec<Baby>>;
    fn dashboard(&self, baby_id: &str) -> Result<BabyDashboard>;
    fn statistics(&self, baby_id: &str, days: i64) -> Result<BabyStatistics>;
}
