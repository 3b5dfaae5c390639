use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::incidence::{effective_reproduction_number, new_infections, weekly_incidence_per_100k};
use crate::model::params::{check_duration, Disease, Population, Vaccine};
use crate::model::trajectory::{SirsRecord, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SirsState {
    pub s: f64,
    pub i: f64,
    pub r: f64,
}

/// Result of advancing the basic model by one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SirsStep {
    pub next: SirsState,
    /// gamma * R0 * S * I / N on the state the step started from.
    pub new_infections: f64,
}

/// SIRS model with waning immunity and flat-rate vaccination (S -> R).
#[derive(Debug, Clone, PartialEq)]
pub struct SirsModel {
    pub disease: Disease,
    pub population: Population,
    pub vaccine: Vaccine,
}

impl SirsModel {
    pub fn new(disease: Disease, population: Population, vaccine: Vaccine) -> Result<Self> {
        disease.check()?;
        population.check()?;
        vaccine.check()?;
        Ok(Self { disease, population, vaccine })
    }

    pub fn initial_state(&self) -> SirsState {
        SirsState {
            s: self.population.susceptible(),
            i: self.population.infectious,
            r: self.population.removed,
        }
    }

    /// One explicit Euler day. The day index does not enter the update; R is
    /// recomputed as the remainder of the population rather than integrated.
    pub fn step(&self, _day: u32, state: SirsState) -> SirsStep {
        let n = self.population.total;
        let r0 = self.disease.reproduction_number;
        let gamma = self.disease.infectivity_rate;
        let delta = self.disease.waning_rate();
        let SirsState { s, i, r } = state;

        let daily_vaccinated = s.min(self.vaccine.daily_capacity);
        let doses = self.vaccine.doses_required as f64;

        let ds = -gamma * r0 * i * s / n + delta * r
            - daily_vaccinated / doses * self.vaccine.efficacy;
        let di = gamma * (effective_reproduction_number(r0, s, n) - 1.0) * i;
        let new_cases = new_infections(gamma, r0, s, i, n);

        let s_next = (s + ds).max(0.0);
        let i_next = (i + di).max(0.0);
        let r_next = (n - s_next - i_next).max(0.0);

        SirsStep {
            next: SirsState { s: s_next, i: i_next, r: r_next },
            new_infections: new_cases,
        }
    }

    /// Run for `duration_days` days. Record `d` holds the compartments after
    /// day `d` and the incidence of the cases that arose during it.
    pub fn simulate(&self, duration_days: u32) -> Result<Trajectory<SirsRecord>> {
        check_duration(duration_days)?;
        let n = self.population.total;

        let mut state = self.initial_state();
        let mut records = Vec::with_capacity(duration_days as usize);
        for day in 0..duration_days {
            let step = self.step(day, state);
            state = step.next;
            records.push(SirsRecord {
                day,
                susceptible: state.s,
                infectious: state.i,
                removed: state.r,
                incidence: weekly_incidence_per_100k(step.new_infections, n),
            });
        }

        info!(days = duration_days, final_infectious = state.i, "sirs run complete");
        Ok(Trajectory::new(records, Vec::new()))
    }
}
