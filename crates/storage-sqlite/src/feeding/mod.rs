mod model;
mod repository;

pub use model::{
    FormulaDB, NewFormulaDB, NewNursingDB, NewPumpingDB, NewSolidsDB, NursingDB, PumpingDB,
    SolidsDB,
};
pub use repository::{FormulaRepository, NursingRepository, PumpingRepository, SolidsRepository};
