mod model;
mod repository;

pub use model::{
    BathDB, NewBathDB, NewPhotoDB, NewPlaytimeDB, NewVideoDB, PhotoDB, PlaytimeDB, VideoDB,
};
pub use repository::{BathRepository, PhotoRepository, PlaytimeRepository, VideoRepository};
