pub mod error;
pub mod incidence;
pub mod io;
pub mod model;
pub mod report;

pub use error::ModelError;
pub use io::scenario::{Scenario, ScenarioRun};
pub use model::containment::{ContainmentModel, ContainmentState, Controller, StepOutcome};
pub use model::params::{
    Disease, LockdownPolicy, Mode, Population, StratifiedPopulation, Vaccine, VaccineRollout,
};
pub use model::sirs::{SirsModel, SirsState, SirsStep};
pub use model::trajectory::{ContainmentRecord, DailyRecord, SirsRecord, Trajectory};
pub use report::RunSummary;
