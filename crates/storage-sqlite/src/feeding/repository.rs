//! SQLite-backed repositories for feeding events.

use nestling_core::feeding::{
    Formula, NewFormula, NewNursing, NewPumping, NewSolids, Nursing, Pumping, Solids,
};

use super::model::{
    FormulaDB, NewFormulaDB, NewNursingDB, NewPumpingDB, NewSolidsDB, NursingDB, PumpingDB,
    SolidsDB,
};
use crate::event_repository;

event_repository!(NursingRepository, nursing, NursingDB, NewNursingDB, Nursing, NewNursing);
event_repository!(FormulaRepository, formula, FormulaDB, NewFormulaDB, Formula, NewFormula);
event_repository!(PumpingRepository, pumping, PumpingDB, NewPumpingDB, Pumping, NewPumping);
event_repository!(SolidsRepository, solids, SolidsDB, NewSolidsDB, Solids, NewSolids);
