use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::containment::ContainmentModel;
use crate::model::params::{
    Disease, LockdownPolicy, Mode, Population, StratifiedPopulation, Vaccine, VaccineRollout,
};
use crate::model::sirs::SirsModel;
use crate::model::trajectory::{ContainmentRecord, SirsRecord, Trajectory};
use crate::report::RunSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SirsScenario {
    #[serde(default)]
    pub name: String,
    pub disease: Disease,
    pub population: Population,
    pub vaccine: Vaccine,
    pub duration_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainmentScenario {
    #[serde(default)]
    pub name: String,
    pub disease: Disease,
    pub population: StratifiedPopulation,
    pub vaccine: VaccineRollout,
    pub lockdown: LockdownPolicy,
    pub duration_days: u32,
}

/// A complete, runnable parameter set as stored in scenario files.
///
/// ```json
/// { "model": "sirs", "disease": { ... }, "population": { ... },
///   "vaccine": { ... }, "duration_days": 1800 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Scenario {
    Sirs(SirsScenario),
    Containment(ContainmentScenario),
}

/// Trajectory produced by running a [`Scenario`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScenarioRun {
    Sirs(Trajectory<SirsRecord>),
    Containment(Trajectory<ContainmentRecord>),
}

impl Scenario {
    pub fn name(&self) -> &str {
        match self {
            Scenario::Sirs(s) => &s.name,
            Scenario::Containment(s) => &s.name,
        }
    }

    pub fn model_kind(&self) -> &'static str {
        match self {
            Scenario::Sirs(_) => "sirs",
            Scenario::Containment(_) => "containment",
        }
    }

    pub fn duration_days(&self) -> u32 {
        match self {
            Scenario::Sirs(s) => s.duration_days,
            Scenario::Containment(s) => s.duration_days,
        }
    }

    pub fn total_population(&self) -> f64 {
        match self {
            Scenario::Sirs(s) => s.population.total,
            Scenario::Containment(s) => s.population.base.total,
        }
    }

    /// Validate the bundles, build the model and run it.
    pub fn run(&self) -> Result<ScenarioRun, ModelError> {
        match self {
            Scenario::Sirs(s) => {
                let model = SirsModel::new(s.disease, s.population, s.vaccine)?;
                Ok(ScenarioRun::Sirs(model.simulate(s.duration_days)?))
            }
            Scenario::Containment(s) => {
                let model = ContainmentModel::new(s.disease, s.population, s.vaccine, s.lockdown)?;
                Ok(ScenarioRun::Containment(model.simulate(s.duration_days)?))
            }
        }
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("Failed to parse scenario JSON")
    }

    pub fn load_json(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scenario file: {}", path.display()))
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).context("serialize scenario failed")?;
        std::fs::write(path, text)
            .with_context(|| format!("write scenario file failed (path={:?})", path))
    }

    /// SIRS with vaccination, Germany-sized population.
    pub fn germany_sirs() -> Self {
        Scenario::Sirs(SirsScenario {
            name: "germany-sirs".to_string(),
            disease: Disease::new(3.0, 0.1, 365.0),
            population: Population::new(83_900_000.0, 1_000.0, 0.0),
            vaccine: Vaccine::new(200_000.0, 2, 0.9),
            duration_days: 1800,
        })
    }

    /// Lockdown strategy from an early-2021 German starting point, beginning
    /// in lockdown with vaccination already under way.
    pub fn germany_containment() -> Self {
        Scenario::Containment(ContainmentScenario {
            name: "germany-containment".to_string(),
            // 1e10 days approximates immunity that never wanes
            disease: Disease::new(3.0, 0.1, 1e10),
            population: StratifiedPopulation::new(
                Population::new(83_900_000.0, 129_203.0, 2_243_892.0 * 2.0),
                60.8,
                0.3,
                0.7,
            ),
            vaccine: VaccineRollout::new(Vaccine::new(600_000.0, 2, 0.95), 28, 0, 1_700_000.0),
            lockdown: LockdownPolicy::new(215.0, 35.0, 1.6, 0.7, Mode::Lockdown),
            duration_days: 360,
        })
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "sirs" | "germany-sirs" => Some(Self::germany_sirs()),
            "containment" | "germany-containment" => Some(Self::germany_containment()),
            _ => None,
        }
    }
}

impl ScenarioRun {
    pub fn len(&self) -> usize {
        match self {
            ScenarioRun::Sirs(t) => t.len(),
            ScenarioRun::Containment(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lockdown_episodes(&self) -> &[u32] {
        match self {
            ScenarioRun::Sirs(t) => t.lockdown_episodes(),
            ScenarioRun::Containment(t) => t.lockdown_episodes(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        match self {
            ScenarioRun::Sirs(t) => RunSummary::from_trajectory(t),
            ScenarioRun::Containment(t) => RunSummary::from_trajectory(t),
        }
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        match self {
            ScenarioRun::Sirs(t) => crate::io::trajectory_csv::write_trajectory_csv(path, t),
            ScenarioRun::Containment(t) => crate::io::trajectory_csv::write_trajectory_csv(path, t),
        }
    }
}
