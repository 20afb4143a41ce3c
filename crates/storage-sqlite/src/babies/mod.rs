//! SQLite storage implementation for baby profiles.

mod model;
mod repository;

pub use model::{BabyDB, NewBabyDB};
pub use repository::BabyRepository;
